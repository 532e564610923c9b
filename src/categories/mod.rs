//! Category hierarchies: loading the YAML tree, normalizing it into sorted
//! dot-paths, and flattening the list-with-adjacent-sublists convention.

pub mod flatten;
pub mod loader;
pub mod node;
pub mod normalize;

use std::collections::BTreeMap;

pub use flatten::{flatten, flatten_category, flatten_set, FlatItem};
pub use loader::{load_categories, parse_categories};
pub use node::Node;
pub use normalize::normalize;

/// Separator between the segments of a category path.
pub const PATH_SEPARATOR: char = '.';

/// Category name mapped to its sorted, duplicate-free list of path strings.
pub type CategorySet = BTreeMap<String, Vec<String>>;

pub(crate) fn join_path(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{segment}"),
        None => segment.to_string(),
    }
}

/// Sorts ascending and collapses repeated paths.
pub(crate) fn into_canonical(mut paths: Vec<String>) -> Vec<String> {
    paths.sort_unstable();
    paths.dedup();
    paths
}

use tracing::{debug, trace};

use super::{into_canonical, join_path, CategorySet, Node};

/// Builds the category set from a loaded tree.
///
/// Each top-level key names a category. Scalars become root paths, mapping
/// entries contribute their key plus every descendant path below it, and a
/// sequence directly after a scalar or key holds that item's children. Paths
/// are sorted and deduplicated per category. A missing tree or a non-mapping
/// root gives an empty set; a category whose value is a plain scalar is kept
/// with no paths.
pub fn normalize(tree: Option<&Node>) -> CategorySet {
    let mut set = CategorySet::new();
    let entries = match tree {
        Some(Node::Mapping(entries)) => entries,
        Some(_) => {
            debug!("category tree root is not a mapping; ignoring it");
            return set;
        }
        None => return set,
    };

    for (name, value) in entries {
        let mut paths = Vec::new();
        match value {
            Node::Sequence(items) => expand_sequence(None, items, &mut paths),
            Node::Mapping(children) => {
                expand_mapping(None, children, &mut paths);
            }
            Node::Scalar(_) => debug!(category = %name, "category value is not a list"),
        }
        set.insert(name.clone(), into_canonical(paths));
    }
    set
}

fn expand_sequence(prefix: Option<&str>, items: &[Node], paths: &mut Vec<String>) {
    let mut parent: Option<String> = None;
    for item in items {
        match item {
            Node::Scalar(segment) => {
                let path = join_path(prefix, segment);
                paths.push(path.clone());
                parent = Some(path);
            }
            Node::Mapping(entries) => {
                parent = expand_mapping(prefix, entries, paths);
            }
            Node::Sequence(children) => match parent.as_deref() {
                Some(parent) => expand_sequence(Some(parent), children, paths),
                None => trace!(count = children.len(), "dropping children with no parent"),
            },
        }
    }
}

/// Expands mapping entries below `prefix`, returning the last key's path.
fn expand_mapping(
    prefix: Option<&str>,
    entries: &[(String, Node)],
    paths: &mut Vec<String>,
) -> Option<String> {
    let mut last = None;
    for (key, value) in entries {
        let path = join_path(prefix, key);
        paths.push(path.clone());
        expand_value(&path, value, paths);
        last = Some(path);
    }
    last
}

fn expand_value(prefix: &str, value: &Node, paths: &mut Vec<String>) {
    match value {
        Node::Scalar(segment) => paths.push(join_path(Some(prefix), segment)),
        Node::Sequence(items) => expand_sequence(Some(prefix), items, paths),
        Node::Mapping(entries) => {
            expand_mapping(Some(prefix), entries, paths);
        }
    }
}

use std::{fs, io, path::Path};

use serde_yaml::Value;
use tracing::{debug, warn};

use super::{normalize, CategorySet, Node};
use crate::errors::CategoryError;

/// Loads and normalizes the category file at `path`.
///
/// A missing, unreadable or malformed file degrades to an empty set so the
/// questionnaire still runs with free-text fields.
pub fn load_categories(path: &Path) -> CategorySet {
    match read_categories(path) {
        Ok(set) => {
            debug!(path = %path.display(), categories = set.len(), "loaded categories");
            set
        }
        Err(CategoryError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no category file found");
            CategorySet::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unusable category file");
            CategorySet::new()
        }
    }
}

fn read_categories(path: &Path) -> Result<CategorySet, CategoryError> {
    let text = fs::read_to_string(path)?;
    parse_categories(&text)
}

/// Parses YAML text into a category set.
pub fn parse_categories(text: &str) -> Result<CategorySet, CategoryError> {
    let value: Value = serde_yaml::from_str(text)?;
    let tree = Node::from_yaml(&value);
    Ok(normalize(tree.as_ref()))
}

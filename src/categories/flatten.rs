use tracing::trace;

use super::{into_canonical, join_path, CategorySet, Node};

/// One element of a hand-authored category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatItem {
    /// A root entry. Text that already contains `.` is a finished path and is
    /// kept as written.
    Path(String),
    /// Children of the closest preceding `Path`.
    Children(Vec<String>),
}

impl FlatItem {
    pub fn path(value: impl Into<String>) -> Self {
        FlatItem::Path(value.into())
    }

    pub fn children<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        FlatItem::Children(values.into_iter().map(Into::into).collect())
    }

    /// Reads one list element. Mappings, and anything that is not a string
    /// inside a child list, have no meaning here and are skipped.
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(value) => Some(FlatItem::Path(value.clone())),
            Node::Sequence(children) => Some(FlatItem::Children(
                children
                    .iter()
                    .filter_map(Node::as_scalar)
                    .map(str::to_string)
                    .collect(),
            )),
            Node::Mapping(_) => {
                trace!("skipping mapping inside a flat category list");
                None
            }
        }
    }
}

struct Entry<'a> {
    segment: &'a str,
    parent: Option<usize>,
}

/// Expands adjacency into dot paths, then sorts and deduplicates.
///
/// The input order decides which entry a child list belongs to; the output is
/// always in canonical sorted order. A child list with no preceding entry is
/// dropped.
pub fn flatten(items: &[FlatItem]) -> Vec<String> {
    let entries = link_entries(items);
    let paths = (0..entries.len())
        .map(|idx| resolve_path(&entries, idx))
        .collect();
    into_canonical(paths)
}

fn link_entries(items: &[FlatItem]) -> Vec<Entry<'_>> {
    let mut entries = Vec::new();
    let mut previous: Option<usize> = None;

    for item in items {
        match item {
            FlatItem::Path(segment) => {
                entries.push(Entry {
                    segment,
                    parent: None,
                });
                previous = Some(entries.len() - 1);
            }
            FlatItem::Children(children) => {
                let Some(parent) = previous else {
                    trace!(count = children.len(), "dropping orphan child list");
                    continue;
                };
                entries.extend(children.iter().map(|child| Entry {
                    segment: child,
                    parent: Some(parent),
                }));
            }
        }
    }
    entries
}

fn resolve_path(entries: &[Entry<'_>], idx: usize) -> String {
    let entry = &entries[idx];
    match entry.parent {
        Some(parent) => join_path(Some(&resolve_path(entries, parent)), entry.segment),
        None => entry.segment.to_string(),
    }
}

/// Flattens the list stored under `name`. Missing input, a non-mapping root,
/// an absent key or a non-list value all give an empty list.
pub fn flatten_category(partial: Option<&Node>, name: &str) -> Vec<String> {
    let Some(Node::Mapping(entries)) = partial else {
        return Vec::new();
    };
    entries
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| flatten_value(value))
        .unwrap_or_default()
}

/// Flattens every category independently.
pub fn flatten_set(partial: Option<&Node>) -> CategorySet {
    let Some(Node::Mapping(entries)) = partial else {
        return CategorySet::new();
    };
    let mut set = CategorySet::new();
    for (name, value) in entries {
        let mut paths = flatten_value(value);
        if let Some(existing) = set.remove(name) {
            paths.extend(existing);
            paths = into_canonical(paths);
        }
        set.insert(name.clone(), paths);
    }
    set
}

fn flatten_value(value: &Node) -> Vec<String> {
    match value {
        Node::Sequence(items) => {
            let items: Vec<FlatItem> = items.iter().filter_map(FlatItem::from_node).collect();
            flatten(&items)
        }
        _ => Vec::new(),
    }
}

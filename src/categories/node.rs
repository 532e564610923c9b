use serde_yaml::Value;

/// Generic category tree as read from the configuration file.
///
/// Mapping entries keep file order; keys are unique within one mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Sequence made only of scalars.
    pub fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Node::Sequence(items.into_iter().map(Node::scalar).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Converts a parsed YAML document. A null document yields `None`.
    ///
    /// Null values below the root (`- transport:` with nothing under it) become
    /// empty sequences, and numbers or booleans are kept as their text.
    pub fn from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            other => Some(Self::convert(other)),
        }
    }

    fn convert(value: &Value) -> Self {
        match value {
            Value::Null => Node::Sequence(Vec::new()),
            Value::Bool(flag) => Node::Scalar(flag.to_string()),
            Value::Number(number) => Node::Scalar(number.to_string()),
            Value::String(text) => Node::Scalar(text.clone()),
            Value::Sequence(items) => Node::Sequence(items.iter().map(Self::convert).collect()),
            Value::Mapping(mapping) => Node::Mapping(
                mapping
                    .iter()
                    .filter_map(|(key, value)| {
                        let key = yaml_key(key);
                        if key.is_none() {
                            tracing::debug!("skipping non-scalar mapping key in category tree");
                        }
                        key.map(|key| (key, Self::convert(value)))
                    })
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::convert(&tagged.value),
        }
    }
}

fn yaml_key(key: &Value) -> Option<String> {
    match key {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

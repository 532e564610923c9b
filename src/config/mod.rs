use std::{env, path::PathBuf};

/// Category file looked up when `--categories` is not given.
pub const DEFAULT_CATEGORIES_FILE: &str = "categories.yaml";

/// Environment variable overriding the category file path.
pub const CATEGORIES_ENV: &str = "QUESTIONNAIRE_CATEGORIES";

/// When set, answers are read line by line from stdin without terminal prompts.
pub const SCRIPT_ENV: &str = "QUESTIONNAIRE_SCRIPT";

/// Fields asked for when the CSV file does not exist yet.
pub const DEFAULT_HEADERS: [&str; 3] = ["Amount", "Category", "Account"];

/// Runtime settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub categories_path: PathBuf,
    pub default_headers: Vec<String>,
    pub script_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories_path: PathBuf::from(DEFAULT_CATEGORIES_FILE),
            default_headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            script_mode: false,
        }
    }
}

impl Settings {
    /// Defaults adjusted by the process environment. The category path
    /// variable is read by the argument parser, not here.
    pub fn from_env() -> Self {
        Self::default().with_script_mode(env::var_os(SCRIPT_ENV).is_some())
    }

    pub fn with_categories_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.categories_path = path;
        }
        self
    }

    pub fn with_script_mode(mut self, enabled: bool) -> Self {
        self.script_mode = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_category_file() {
        let settings = Settings::default();
        assert_eq!(settings.categories_path, PathBuf::from("categories.yaml"));
        assert_eq!(settings.default_headers, vec!["Amount", "Category", "Account"]);
        assert!(!settings.script_mode);
    }

    #[test]
    fn explicit_path_wins() {
        let settings = Settings::default().with_categories_path(Some("custom.yaml".into()));
        assert_eq!(settings.categories_path, PathBuf::from("custom.yaml"));

        let untouched = Settings::default().with_categories_path(None);
        assert_eq!(untouched.categories_path, PathBuf::from("categories.yaml"));
    }
}

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures raised while reading the category configuration file.
///
/// These never reach the user as errors: the loader logs them and falls back
/// to an empty category set.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors produced by the flat-file store.
///
/// The `Display` strings double as the diagnostics printed by `show`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("CSV file is empty or invalid")]
    Empty,
    #[error("CSV header row is missing")]
    MissingHeader,
    #[error("Invalid CSV format: row {line} has {found} columns, expected {expected}")]
    ColumnMismatch {
        line: u64,
        found: usize,
        expected: usize,
    },
    #[error("Record has {found} answers for {expected} headers")]
    RecordShape { found: usize, expected: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Errors surfaced by interactive input sources.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("input closed before a value was entered")]
    InputClosed,
    #[error("no choices available for {0}")]
    NoOptions(String),
}

/// Top level error returned by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub mod csv_store;

use chrono::NaiveDateTime;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Name of the first column of every stored file.
pub const TIMESTAMP_HEADER: &str = "Timestamp";

/// Format of the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rows read back from a store, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Append-only record storage used by the questionnaire.
pub trait RecordStore {
    /// Appends one row stamped with `timestamp`. `headers` describes the
    /// columns of `values` and is written only when the store is new.
    fn append(&self, headers: &[String], values: &[String], timestamp: NaiveDateTime)
        -> Result<()>;

    /// Field headers already in use, without the timestamp column.
    fn headers(&self) -> Result<Option<Vec<String>>>;

    /// Every stored row, validated against the header row.
    fn load(&self) -> Result<Records>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}

pub use csv_store::{ensure_trailing_newline, CsvStore};

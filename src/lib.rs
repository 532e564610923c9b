#![doc(test(attr(deny(warnings))))]

//! Questionnaire collects field answers from the terminal, constrains category
//! fields to a hierarchy loaded from YAML, and appends timestamped rows to a
//! CSV file that can later be shown as a table.

pub mod categories;
pub mod cli;
pub mod config;
pub mod errors;
pub mod session;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Questionnaire tracing initialized.");
    });
}

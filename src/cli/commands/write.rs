use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::categories::load_categories;
use crate::cli::input::InputSource;
use crate::config::Settings;
use crate::errors::CliError;
use crate::session::{EntrySession, SessionSummary};
use crate::storage::{CsvStore, RecordStore};
use crate::utils::Clock;

/// Headers of an existing file, or the configured defaults for a new one.
pub fn resolve_headers(
    store: &dyn RecordStore,
    settings: &Settings,
) -> Result<Vec<String>, CliError> {
    match store.headers()? {
        Some(headers) => {
            debug!(count = headers.len(), "using headers from existing file");
            Ok(headers)
        }
        None => Ok(settings.default_headers.clone()),
    }
}

/// Runs the questionnaire against `csv_file` until the user quits.
pub fn run_write(
    csv_file: &Path,
    settings: &Settings,
    input: &mut dyn InputSource,
    out: &mut dyn Write,
    clock: &dyn Clock,
) -> Result<SessionSummary, CliError> {
    let categories = load_categories(&settings.categories_path);
    let store = CsvStore::new(csv_file);
    let headers = resolve_headers(&store, settings)?;

    let mut session = EntrySession::new(headers, &categories, input, out, &store, clock);
    let summary = session.run()?;
    info!(saved = summary.saved, end = ?summary.end, "questionnaire finished");
    Ok(summary)
}

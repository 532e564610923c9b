use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use crate::cli::output::{self, MessageKind};
use crate::cli::ui::table_renderer::Table;
use crate::errors::StoreError;
use crate::storage::{CsvStore, RecordStore};

/// Prints the entries of `csv_file` as a table.
///
/// Problems with the file are reported as messages; only failures writing
/// to `out` are returned.
pub fn run_show<W: Write + ?Sized>(csv_file: &Path, out: &mut W) -> io::Result<()> {
    let store = CsvStore::new(csv_file);
    let records = match store.load() {
        Ok(records) => records,
        Err(
            err @ (StoreError::NotFound(_)
            | StoreError::Empty
            | StoreError::MissingHeader
            | StoreError::ColumnMismatch { .. }),
        ) => return output::write(out, MessageKind::Error, err),
        Err(err) => {
            warn!(path = %csv_file.display(), error = %err, "failed to read entries");
            return output::write(
                out,
                MessageKind::Error,
                format!("could not read CSV file: {err}"),
            );
        }
    };

    if records.is_empty() {
        return output::write(
            out,
            MessageKind::Info,
            format!("No entries found in {}", csv_file.display()),
        );
    }

    let table = Table::from_records(&records).fit_to_terminal();
    writeln!(out)?;
    writeln!(out, "{}", table.render())?;
    writeln!(out)?;
    output::write(
        out,
        MessageKind::Info,
        format!("Total entries: {}", records.len()),
    )
}

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    iter,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, info};

use super::{RecordStore, Records, Result, TIMESTAMP_FORMAT, TIMESTAMP_HEADER};
use crate::errors::StoreError;

/// Comma separated file holding one timestamped row per saved entry.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_new(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true)
    }

    fn reader(&self) -> Result<csv::Reader<File>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()))
            }
            Err(err) => return Err(err.into()),
        };
        Ok(ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file))
    }
}

impl RecordStore for CsvStore {
    fn append(
        &self,
        headers: &[String],
        values: &[String],
        timestamp: NaiveDateTime,
    ) -> Result<()> {
        if headers.len() != values.len() {
            return Err(StoreError::RecordShape {
                found: values.len(),
                expected: headers.len(),
            });
        }

        ensure_trailing_newline(&self.path)?;
        let write_header = self.is_new();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        if write_header {
            writer.write_record(
                iter::once(TIMESTAMP_HEADER).chain(headers.iter().map(String::as_str)),
            )?;
        }
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        writer.write_record(iter::once(stamp.as_str()).chain(values.iter().map(String::as_str)))?;
        writer.flush()?;

        info!(path = %self.path.display(), header = write_header, "appended record");
        Ok(())
    }

    fn headers(&self) -> Result<Option<Vec<String>>> {
        let mut reader = match self.reader() {
            Ok(reader) => reader,
            Err(StoreError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err),
        };
        let Some(first) = reader.records().next() else {
            return Ok(None);
        };
        let mut headers: Vec<String> = first?.iter().map(str::to_string).collect();
        if headers
            .first()
            .is_some_and(|name| name.eq_ignore_ascii_case(TIMESTAMP_HEADER))
        {
            headers.remove(0);
        }
        Ok(if headers.is_empty() { None } else { Some(headers) })
    }

    fn load(&self) -> Result<Records> {
        let mut reader = self.reader()?;
        let mut records = reader.records();

        let headers = match records.next() {
            Some(record) => record?,
            None => return Err(StoreError::Empty),
        };
        if headers.iter().all(|cell| cell.trim().is_empty()) {
            return Err(StoreError::Empty);
        }
        if looks_like_data(&headers) {
            return Err(StoreError::MissingHeader);
        }

        let expected = headers.len();
        let mut rows = Vec::new();
        for (idx, record) in records.enumerate() {
            let record = record?;
            if record.len() != expected {
                let line = record
                    .position()
                    .map(|pos| pos.line())
                    .unwrap_or(idx as u64 + 2);
                return Err(StoreError::ColumnMismatch {
                    line,
                    found: record.len(),
                    expected,
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded records");
        Ok(Records {
            headers: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A first row that starts with a timestamp is data, not a header.
fn looks_like_data(first: &StringRecord) -> bool {
    first
        .get(0)
        .is_some_and(|cell| NaiveDateTime::parse_from_str(cell.trim(), TIMESTAMP_FORMAT).is_ok())
}

/// Adds a final `\n` when the file's last byte is anything else.
///
/// Missing and empty files are left alone. The file is opened and closed here,
/// separately from the append that follows.
pub fn ensure_trailing_newline(path: &Path) -> io::Result<()> {
    let mut file = match OpenOptions::new().read(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };
    if file.metadata()?.len() == 0 {
        return Ok(());
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        debug!(path = %path.display(), "repairing missing trailing newline");
        file.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 16)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn newline_repair_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Timestamp,Amount").unwrap();

        ensure_trailing_newline(&path).unwrap();
        ensure_trailing_newline(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Timestamp,Amount\n");
    }

    #[test]
    fn newline_repair_ignores_missing_and_empty_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        ensure_trailing_newline(&missing).unwrap();
        assert!(!missing.exists());

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        ensure_trailing_newline(&empty).unwrap();
        assert_eq!(fs::read_to_string(&empty).unwrap(), "");
    }

    #[test]
    fn append_writes_header_once() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data.csv"));
        let headers = strings(&["Amount", "Category"]);

        store.append(&headers, &strings(&["10", "food"]), stamp()).unwrap();
        store.append(&headers, &strings(&["20", "transport.taxi"]), stamp()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Timestamp,Amount,Category\n\
             2025-01-16 13:00:00,10,food\n\
             2025-01-16 13:00:00,20,transport.taxi\n"
        );
    }

    #[test]
    fn append_quotes_embedded_commas() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data.csv"));
        let headers = strings(&["Note"]);

        store.append(&headers, &strings(&["a, b"]), stamp()).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.rows[0][1], "a, b");
    }

    #[test]
    fn append_rejects_mismatched_record() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data.csv"));
        let err = store
            .append(&strings(&["Amount", "Category"]), &strings(&["10"]), stamp())
            .unwrap_err();
        assert!(matches!(err, StoreError::RecordShape { found: 1, expected: 2 }));
        assert!(!store.path().exists());
    }

    #[test]
    fn headers_strip_timestamp_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "timestamp,Amount,Category,Account\n").unwrap();

        let headers = CsvStore::new(&path).headers().unwrap();
        assert_eq!(headers, Some(strings(&["Amount", "Category", "Account"])));
    }

    #[test]
    fn headers_absent_for_missing_or_empty_file() {
        let dir = tempdir().unwrap();
        assert_eq!(CsvStore::new(dir.path().join("none.csv")).headers().unwrap(), None);

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        assert_eq!(CsvStore::new(&empty).headers().unwrap(), None);
    }

    #[test]
    fn load_reports_missing_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "2025-01-16 13:00:00,50,food\n").unwrap();

        assert!(matches!(
            CsvStore::new(&path).load(),
            Err(StoreError::MissingHeader)
        ));
    }

    #[test]
    fn load_reports_column_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Header1,Header2\n1,2,3,4\n").unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid CSV format: row 2 has 4 columns, expected 2"
        );
    }
}

mod common;

use common::{instant, strings, Workspace};
use questionnaire::cli::commands::run_show;
use questionnaire::storage::{CsvStore, RecordStore};

const SAMPLE: &str = "\
Timestamp,Amount,Category,Account
2025-01-15 10:30:00,100.00,food,savings
2025-01-15 14:45:00,50.00,transport.taxi,checking
";

fn show(path: &std::path::Path) -> String {
    let mut out = Vec::new();
    run_show(path, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn shows_every_entry_with_a_total() {
    let ws = Workspace::new();
    let path = ws.write("sample.csv", SAMPLE);

    let text = show(&path);

    assert!(text.contains("Timestamp"));
    assert!(text.contains("transport.taxi"));
    assert!(text.contains("2025-01-15 14:45:00"));
    assert!(text.contains("Total entries: 2"));
}

#[test]
fn ragged_rows_are_reported() {
    let ws = Workspace::new();
    let path = ws.write(
        "ragged.csv",
        "Timestamp,Amount,Category\n2025-01-15 10:30:00,100.00,food,extra\n",
    );

    let text = show(&path);

    assert!(text.contains("Error: Invalid CSV format: row 2 has 4 columns, expected 3"));
    assert!(!text.contains("Total entries"));
}

#[test]
fn headerless_file_is_reported() {
    let ws = Workspace::new();
    let path = ws.write("rows.csv", "2025-01-15 10:30:00,100.00,food\n");

    assert!(show(&path).contains("Error: CSV header row is missing"));
}

#[test]
fn saved_entries_show_up() {
    let ws = Workspace::new();
    let path = ws.path("roundtrip.csv");
    let store = CsvStore::new(&path);
    let headers = strings(&["Amount", "Category"]);
    store
        .append(&headers, &strings(&["75.50", "utilities"]), instant())
        .unwrap();
    store
        .append(&headers, &strings(&["12", "food"]), instant())
        .unwrap();

    let text = show(&path);

    assert!(text.contains("75.50"));
    assert!(text.contains("utilities"));
    assert!(text.contains("Total entries: 2"));
}

#[test]
fn appending_repairs_a_missing_final_newline() {
    let ws = Workspace::new();
    let path = ws.write(
        "no_newline.csv",
        "Timestamp,Amount,Category\n2025-01-15 10:30:00,100.00,food",
    );
    let store = CsvStore::new(&path);

    store
        .append(
            &strings(&["Amount", "Category"]),
            &strings(&["5", "other"]),
            instant(),
        )
        .unwrap();

    assert_eq!(
        ws.read(&path),
        "Timestamp,Amount,Category\n\
         2025-01-15 10:30:00,100.00,food\n\
         2025-01-16 13:00:00,5,other\n"
    );
    assert!(show(&path).contains("Total entries: 2"));
}

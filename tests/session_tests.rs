mod common;

use common::{instant, strings, Workspace};
use questionnaire::categories::{flatten_set, CategorySet, Node};
use questionnaire::cli::commands::run_write;
use questionnaire::cli::input::ScriptedInput;
use questionnaire::config::Settings;
use questionnaire::session::{EntrySession, SessionEnd};
use questionnaire::storage::{CsvStore, RecordStore};
use questionnaire::utils::FixedClock;

fn categories() -> CategorySet {
    flatten_set(Some(&Node::map([
        (
            "Category",
            Node::seq([
                Node::scalar("food"),
                Node::scalar("transport"),
                Node::strings(["public", "taxi", "train"]),
                Node::scalar("entertainment"),
                Node::strings(["movie", "concert", "sports"]),
                Node::scalar("utilities"),
                Node::scalar("other"),
            ]),
        ),
        (
            "Account",
            Node::strings(["savings", "checking", "cash", "crypto wallet"]),
        ),
    ])))
}

#[test]
fn collects_free_text_and_category_fields() {
    let ws = Workspace::new();
    let store = CsvStore::new(ws.path("answers.csv"));
    let categories = categories();
    let clock = FixedClock(instant());
    let mut input = ScriptedInput::new(["John Doe", "9", "3", "50.00"]);
    let mut out = Vec::new();

    let mut session = EntrySession::new(
        strings(&["Name", "Category", "Account", "Amount"]),
        &categories,
        &mut input,
        &mut out,
        &store,
        &clock,
    );
    let record = session.collect().unwrap();

    assert_eq!(
        record.answers(),
        vec!["John Doe", "transport.taxi", "crypto wallet", "50.00"]
    );
    drop(session);
    assert_eq!(input.prompts()[0], "What is your name?");
    assert_eq!(input.prompts()[3], "What is your amount?");
}

#[test]
fn save_and_quit_appends_one_row() {
    let ws = Workspace::new();
    let path = ws.path("answers.csv");
    let store = CsvStore::new(&path);
    let categories = categories();
    let clock = FixedClock(instant());
    let mut input = ScriptedInput::new(["100", "5", "1", "3"]);
    let mut out = Vec::new();

    let summary = EntrySession::new(
        strings(&["Amount", "Category", "Account"]),
        &categories,
        &mut input,
        &mut out,
        &store,
        &clock,
    )
    .run()
    .unwrap();

    assert_eq!(summary.saved, 1);
    assert_eq!(summary.end, SessionEnd::Finished);
    assert_eq!(
        ws.read(&path),
        "Timestamp,Amount,Category,Account\n2025-01-16 13:00:00,100,food,cash\n"
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Summary of your responses:"));
    assert!(text.contains("Category: food"));
    assert!(text.contains("Responses have been saved to"));
}

#[test]
fn edit_changes_a_field_before_saving() {
    let ws = Workspace::new();
    let path = ws.path("answers.csv");
    let store = CsvStore::new(&path);
    let categories = categories();
    let clock = FixedClock(instant());
    let mut input = ScriptedInput::new([
        "10", "5", "1", // initial answers: 10, food, cash
        "1",  // edit values
        "x", "7", // not a number, then out of range
        "3", "3", // Account -> crypto wallet
        "1", "250", // Amount -> 250
        "0", // done editing
        "3", // save and quit
    ]);
    let mut out = Vec::new();

    let summary = EntrySession::new(
        strings(&["Amount", "Category", "Account"]),
        &categories,
        &mut input,
        &mut out,
        &store,
        &clock,
    )
    .run()
    .unwrap();

    assert_eq!(summary.saved, 1);
    let records = store.load().unwrap();
    assert_eq!(
        records.rows,
        vec![strings(&["2025-01-16 13:00:00", "250", "food", "crypto wallet"])]
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Please enter a valid number."));
    assert!(text.contains("Invalid choice. Please try again."));
}

#[test]
fn save_and_continue_then_discard() {
    let ws = Workspace::new();
    let path = ws.path("answers.csv");
    let store = CsvStore::new(&path);
    let categories = categories();
    let clock = FixedClock(instant());
    let mut input = ScriptedInput::new([
        "10", "5", "1", "9", "2", // first entry, invalid action, save and continue
        "20", "7", "2", "4", // second entry, discard
    ]);
    let mut out = Vec::new();

    let summary = EntrySession::new(
        strings(&["Amount", "Category", "Account"]),
        &categories,
        &mut input,
        &mut out,
        &store,
        &clock,
    )
    .run()
    .unwrap();

    assert_eq!(summary.saved, 1);
    assert_eq!(summary.end, SessionEnd::Cancelled);
    assert_eq!(store.load().unwrap().len(), 1);
    assert!(String::from_utf8(out).unwrap().contains("Entry discarded."));
}

#[test]
fn closed_input_keeps_saved_rows_only() {
    let ws = Workspace::new();
    let path = ws.path("answers.csv");
    let store = CsvStore::new(&path);
    let categories = CategorySet::new();
    let clock = FixedClock(instant());
    let mut input = ScriptedInput::new(["10", "lunch", "2", "20"]);
    let mut out = Vec::new();

    let summary = EntrySession::new(
        strings(&["Amount", "Note"]),
        &categories,
        &mut input,
        &mut out,
        &store,
        &clock,
    )
    .run()
    .unwrap();

    assert_eq!(summary.saved, 1);
    assert_eq!(summary.end, SessionEnd::InputClosed);
    let rows = store.load().unwrap().rows;
    assert_eq!(rows[0][1..].to_vec(), strings(&["10", "lunch"]));
}

#[test]
fn write_command_reuses_existing_headers_and_categories() {
    let ws = Workspace::new();
    let categories_path = ws.write("categories.yaml", "Category:\n  - food\n  - rent\n");
    let csv = ws.write("data.csv", "Timestamp,Category,Amount");
    let settings = Settings::default().with_categories_path(Some(categories_path));
    let mut input = ScriptedInput::new(["2", "900", "3"]);
    let mut out = Vec::new();

    let summary = run_write(
        &csv,
        &settings,
        &mut input,
        &mut out,
        &FixedClock(instant()),
    )
    .unwrap();

    assert_eq!(summary.saved, 1);
    assert_eq!(
        ws.read(&csv),
        "Timestamp,Category,Amount\n2025-01-16 13:00:00,rent,900\n"
    );
}

#[test]
fn write_command_uses_default_headers_for_new_files() {
    let ws = Workspace::new();
    let csv = ws.path("new.csv");
    let settings = Settings::default().with_categories_path(Some(ws.path("none.yaml")));
    let mut input = ScriptedInput::new(["12", "groceries", "cash", "3"]);
    let mut out = Vec::new();

    run_write(&csv, &settings, &mut input, &mut out, &FixedClock(instant())).unwrap();

    let store = CsvStore::new(&csv);
    assert_eq!(
        store.headers().unwrap(),
        Some(strings(&["Amount", "Category", "Account"]))
    );
    assert_eq!(input.prompts()[1], "What is your category?");
}

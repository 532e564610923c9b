use std::io::{self, Write};

use crate::cli::output::{self, MessageKind};
use crate::config::{CATEGORIES_ENV, DEFAULT_CATEGORIES_FILE, SCRIPT_ENV};

/// Static description of one top level command.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub example: &'static str,
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "write",
        description: "Answer the questionnaire and append the entry to a CSV file (default)",
        usage: "questionnaire [write] <csv_file> [--categories <path>]",
        example: "questionnaire write expenses.csv --categories categories.yaml",
    },
    CommandEntry {
        name: "show",
        description: "Display the saved entries of a CSV file as a table",
        usage: "questionnaire show <csv_file>",
        example: "questionnaire show expenses.csv",
    },
    CommandEntry {
        name: "help",
        description: "Show this help message",
        usage: "questionnaire help",
        example: "questionnaire help",
    },
];

pub fn write_overview<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    output::write(out, MessageKind::Section, "Available Commands")?;
    for entry in COMMANDS {
        writeln!(out)?;
        writeln!(out, "  {}", entry.name)?;
        writeln!(out, "    Description: {}", entry.description)?;
        writeln!(out, "    Usage: {}", entry.usage)?;
        writeln!(out, "    Example: {}", entry.example)?;
    }

    output::write(out, MessageKind::Section, "Options")?;
    writeln!(
        out,
        "  --categories <path>  Category definition file (default: {DEFAULT_CATEGORIES_FILE}, env: {CATEGORIES_ENV})"
    )?;
    writeln!(out, "  --plain              Disable colors and use ASCII table rules")?;
    writeln!(out, "  -q, --quiet          Hide section headings and separators")?;
    writeln!(out)?;
    writeln!(
        out,
        "Set {SCRIPT_ENV}=1 to read answers line by line from standard input."
    )
}

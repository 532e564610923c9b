//! Command line arguments.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::CATEGORIES_ENV;
use crate::errors::CliError;

/// Interactive questionnaire that appends timestamped answers to a CSV file
#[derive(Parser, Debug)]
#[command(name = "questionnaire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run (write, show, help); anything else is taken as the CSV file
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// CSV file to append to or show
    #[arg(value_name = "CSV_FILE", value_hint = ValueHint::FilePath)]
    pub csv_file: Option<PathBuf>,

    /// YAML file describing the category hierarchy [default: categories.yaml]
    #[arg(long, value_name = "PATH", env = CATEGORIES_ENV, value_hint = ValueHint::FilePath)]
    pub categories: Option<PathBuf>,

    /// Disable colors and use ASCII table rules
    #[arg(long)]
    pub plain: bool,

    /// Hide section headings and separators
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Write,
    Show,
    Help,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "write" => Some(Command::Write),
            "show" => Some(Command::Show),
            "help" => Some(Command::Help),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Write => "write",
            Command::Show => "show",
            Command::Help => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved request: a command and, except for `help`, its CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub csv_file: Option<PathBuf>,
    pub categories: Option<PathBuf>,
    pub plain: bool,
    pub quiet: bool,
}

impl Cli {
    /// Applies the positional rules: the command defaults to `write`, and a
    /// first argument that is not a command name is the CSV file.
    pub fn resolve(self) -> Result<Invocation, CliError> {
        let (command, csv_file) = match self.command.as_deref() {
            None => (Command::Write, self.csv_file),
            Some(first) => match Command::from_name(first) {
                Some(command) => (command, self.csv_file),
                None => {
                    if let Some(extra) = self.csv_file {
                        return Err(CliError::Usage(format!(
                            "unexpected argument '{}'",
                            extra.display()
                        )));
                    }
                    (Command::Write, Some(PathBuf::from(first)))
                }
            },
        };

        if command != Command::Help && csv_file.is_none() {
            return Err(CliError::Usage(format!(
                "CSV file is required for {command} command"
            )));
        }

        Ok(Invocation {
            command,
            csv_file,
            categories: self.categories,
            plain: self.plain,
            quiet: self.quiet,
        })
    }
}

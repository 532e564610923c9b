//! One interactive run of the questionnaire: collect every field, review,
//! edit, then save or discard.

pub mod record;

use std::fmt;
use std::io::{self, Write};

use tracing::{info, warn};

use crate::categories::CategorySet;
use crate::cli::input::InputSource;
use crate::cli::output::{self, MessageKind};
use crate::cli::selector::{parse_choice, select, Choice};
use crate::errors::{CliError, PromptError};
use crate::storage::RecordStore;
use crate::utils::Clock;

pub use record::FieldRecord;

/// What the user picked from the review menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    SaveAndContinue,
    SaveAndQuit,
    Discard,
}

impl Action {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Action::Edit),
            "2" => Some(Action::SaveAndContinue),
            "3" => Some(Action::SaveAndQuit),
            "4" => Some(Action::Discard),
            _ => None,
        }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Saved the last entry and quit.
    Finished,
    /// Discarded the entry under review.
    Cancelled,
    /// Input ran out; an entry in progress was not saved.
    InputClosed,
}

enum EntryOutcome {
    Saved { quit: bool },
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub saved: usize,
    pub end: SessionEnd,
}

pub struct EntrySession<'a> {
    headers: Vec<String>,
    categories: &'a CategorySet,
    input: &'a mut dyn InputSource,
    out: &'a mut dyn Write,
    store: &'a dyn RecordStore,
    clock: &'a dyn Clock,
}

impl<'a> EntrySession<'a> {
    pub fn new(
        headers: Vec<String>,
        categories: &'a CategorySet,
        input: &'a mut dyn InputSource,
        out: &'a mut dyn Write,
        store: &'a dyn RecordStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            headers,
            categories,
            input,
            out,
            store,
            clock,
        }
    }

    /// Runs entries until the user quits, cancels, or input ends.
    pub fn run(&mut self) -> Result<SessionSummary, CliError> {
        let mut saved = 0;
        loop {
            let end = match self.run_entry() {
                Ok(EntryOutcome::Saved { quit: false }) => {
                    saved += 1;
                    continue;
                }
                Ok(EntryOutcome::Saved { quit: true }) => {
                    saved += 1;
                    SessionEnd::Finished
                }
                Ok(EntryOutcome::Discarded) => {
                    self.say(MessageKind::Warning, "Entry discarded.")?;
                    SessionEnd::Cancelled
                }
                Err(CliError::Prompt(PromptError::InputClosed)) => {
                    warn!(saved, "input closed during questionnaire");
                    self.say(
                        MessageKind::Warning,
                        "Input ended; the current entry was not saved.",
                    )?;
                    SessionEnd::InputClosed
                }
                Err(err) => return Err(err),
            };
            return Ok(SessionSummary { saved, end });
        }
    }

    fn run_entry(&mut self) -> Result<EntryOutcome, CliError> {
        self.say(MessageKind::Section, "Welcome to the questionnaire!")?;
        self.say(MessageKind::Info, "Please answer the following questions:")?;
        writeln!(self.out)?;

        let mut record = self.collect()?;
        self.print_summary(&record)?;

        loop {
            match self.prompt_action()? {
                Action::Edit => self.edit(&mut record)?,
                Action::SaveAndContinue => {
                    self.save(&record)?;
                    return Ok(EntryOutcome::Saved { quit: false });
                }
                Action::SaveAndQuit => {
                    self.save(&record)?;
                    return Ok(EntryOutcome::Saved { quit: true });
                }
                Action::Discard => return Ok(EntryOutcome::Discarded),
            }
        }
    }

    fn say(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        output::write(&mut *self.out, kind, message)
    }

    /// Prompts every field once, in header order.
    pub fn collect(&mut self) -> Result<FieldRecord, PromptError> {
        let mut record = FieldRecord::new(&self.headers);
        for index in 0..self.headers.len() {
            let header = self.headers[index].clone();
            let question = format!("What is your {}?", header.to_lowercase());
            let answer = self.ask(&header, &question)?;
            record.set(index, answer);
        }
        Ok(record)
    }

    /// Category fields go through the selector, everything else is free text.
    fn ask(&mut self, header: &str, question: &str) -> Result<String, PromptError> {
        let categories = self.categories;
        match categories.get(header) {
            Some(options) if !options.is_empty() => {
                select(header, options, &mut *self.input, &mut *self.out)
            }
            _ => self.input.read_line(question),
        }
    }

    pub fn print_summary(&mut self, record: &FieldRecord) -> Result<(), PromptError> {
        writeln!(self.out)?;
        self.say(MessageKind::Section, "Summary of your responses:")?;
        self.say(MessageKind::Separator, "")?;
        for (header, answer) in record.iter() {
            writeln!(self.out, "{header}: {answer}")?;
        }
        self.say(MessageKind::Separator, "")?;
        Ok(())
    }

    fn prompt_action(&mut self) -> Result<Action, PromptError> {
        loop {
            writeln!(self.out)?;
            self.say(MessageKind::Info, "What would you like to do?")?;
            writeln!(self.out, "1. Edit values")?;
            writeln!(self.out, "2. Save and enter next entry")?;
            writeln!(self.out, "3. Save and quit")?;
            writeln!(self.out, "4. Discard entry and quit")?;

            let answer = self.input.read_line("Enter your choice (1-4):")?;
            match Action::parse(&answer) {
                Some(action) => return Ok(action),
                None => self.say(MessageKind::Warning, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Lets the user change single fields until they enter `0`.
    pub fn edit(&mut self, record: &mut FieldRecord) -> Result<(), PromptError> {
        loop {
            writeln!(self.out)?;
            self.say(MessageKind::Info, "Which field would you like to edit?")?;
            for (idx, (header, _)) in record.iter().enumerate() {
                writeln!(self.out, "{}. {}", idx + 1, header)?;
            }
            writeln!(self.out, "0. Done editing")?;

            let answer = self
                .input
                .read_line("Enter the number of the field to edit (0 to finish):")?;
            if answer.trim() == "0" {
                return Ok(());
            }
            match parse_choice(&answer, record.len()) {
                Choice::Selected(index) => {
                    let header = record.header(index).unwrap_or_default().to_string();
                    let value = self.ask(&header, &format!("Enter new value for {header}:"))?;
                    record.set(index, value);
                    self.print_summary(record)?;
                }
                Choice::OutOfRange => {
                    self.say(MessageKind::Warning, "Invalid choice. Please try again.")?
                }
                Choice::NotANumber => self.say(MessageKind::Warning, "Please enter a valid number.")?,
            }
        }
    }

    fn save(&mut self, record: &FieldRecord) -> Result<(), CliError> {
        self.store
            .append(&record.headers(), &record.answers(), self.clock.now())?;
        info!(fields = record.len(), "entry saved");
        writeln!(self.out)?;
        let message = format!("Responses have been saved to {}", self.store.describe());
        self.say(MessageKind::Success, message)?;
        Ok(())
    }
}

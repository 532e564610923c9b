use std::io::Write;

use tracing::debug;

use crate::cli::input::InputSource;
use crate::cli::output::{self, MessageKind};
use crate::errors::PromptError;

const INVALID_NUMBER: &str = "Please enter a valid number.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Outcome of parsing one answer to the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Selected(usize),
    NotANumber,
    OutOfRange,
}

/// Interprets `raw` as a 1-based ordinal into a list of `len` options.
pub fn parse_choice(raw: &str, len: usize) -> Choice {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 && (value as u64) <= len as u64 => {
            Choice::Selected(value as usize - 1)
        }
        Ok(_) => Choice::OutOfRange,
        Err(_) => Choice::NotANumber,
    }
}

/// Numbered menu over a category's flattened paths.
///
/// Options are shown in the order given; callers pass the canonical sorted
/// list produced by the flattener.
pub struct CategorySelector<'a> {
    pub category: &'a str,
    pub options: &'a [String],
}

impl<'a> CategorySelector<'a> {
    pub fn new(category: &'a str, options: &'a [String]) -> Self {
        Self { category, options }
    }

    /// Prompts until a valid ordinal is entered and returns that option.
    pub fn run<I, W>(&self, input: &mut I, out: &mut W) -> Result<String, PromptError>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        if self.options.is_empty() {
            return Err(PromptError::NoOptions(self.category.to_string()));
        }

        self.draw(out)?;
        let prompt = format!("Enter number (1-{}):", self.options.len());
        loop {
            let answer = input.read_line(&prompt)?;
            match parse_choice(&answer, self.options.len()) {
                Choice::Selected(index) => {
                    debug!(category = self.category, index, "category selected");
                    return Ok(self.options[index].clone());
                }
                Choice::NotANumber => output::write(out, MessageKind::Warning, INVALID_NUMBER)?,
                Choice::OutOfRange => output::write(out, MessageKind::Warning, INVALID_CHOICE)?,
            }
        }
    }

    fn draw<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PromptError> {
        writeln!(out)?;
        output::write(out, MessageKind::Info, format!("Select {}:", self.category))?;
        for (idx, option) in self.options.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, option)?;
        }
        Ok(())
    }
}

/// Shorthand for [`CategorySelector::run`].
pub fn select<I, W>(
    category: &str,
    options: &[String],
    input: &mut I,
    out: &mut W,
) -> Result<String, PromptError>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    CategorySelector::new(category, options).run(input, out)
}

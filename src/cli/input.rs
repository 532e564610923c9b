//! Line oriented input sources shared by the selector and the entry session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::errors::PromptError;

/// Supplies one line of user input per prompt.
pub trait InputSource {
    /// Shows `prompt` and blocks until a line is available. The returned text
    /// has no trailing line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Interactive terminal prompt backed by `dialoguer`.
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::from)
    }
}

/// Reads answers from any buffered reader, echoing prompts to `echo`.
///
/// Used for piped stdin and script mode.
pub struct LineInput<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.echo, "{prompt} ")?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.echo)?;
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Fixed queue of answers, consumed front to back.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(PromptError::InputClosed)
    }
}

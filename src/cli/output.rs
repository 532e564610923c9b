use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// ASCII rules and no colors.
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

const SEPARATOR_WIDTH: usize = 30;

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if prefs.plain_mode {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Separator | MessageKind::Section)
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Error => format!("Error: {text}"),
        MessageKind::Separator => "-".repeat(SEPARATOR_WIDTH),
        _ => text,
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Separator | MessageKind::Info => formatted,
    }
}

/// Writes one styled line to `out`.
pub fn write<W: Write + ?Sized>(
    out: &mut W,
    kind: MessageKind,
    message: impl fmt::Display,
) -> io::Result<()> {
    let prefs = current_preferences();
    if should_skip(kind, &prefs) {
        return Ok(());
    }
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => writeln!(out, "\n{formatted}"),
        _ => writeln!(out, "{formatted}"),
    }
}

/// Reports an error on stderr, ignoring failures to write it.
pub fn error(message: impl fmt::Display) {
    let _ = write(&mut io::stderr(), MessageKind::Error, message);
}

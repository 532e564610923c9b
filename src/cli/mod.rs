pub mod args;
pub mod commands;
pub mod help;
pub mod input;
pub mod output;
pub mod selector;
pub mod ui;

use std::io::{self, IsTerminal};

use tracing::debug;

pub use args::{Cli, Command, Invocation};

use crate::cli::input::{InputSource, LineInput, TerminalInput};
use crate::cli::output::{set_preferences, OutputPreferences};
use crate::config::Settings;
use crate::errors::CliError;
use crate::utils::SystemClock;

/// Dispatches a parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let invocation = cli.resolve()?;
    let settings = Settings::from_env().with_categories_path(invocation.categories.clone());

    let stdout = io::stdout();
    set_preferences(OutputPreferences {
        plain_mode: invocation.plain || !stdout.is_terminal(),
        quiet_mode: invocation.quiet,
    });
    debug!(command = %invocation.command, ?settings, "dispatching");

    let mut out = stdout.lock();
    match (invocation.command, invocation.csv_file) {
        (Command::Help, _) => help::write_overview(&mut out)?,
        (Command::Show, Some(csv_file)) => commands::run_show(&csv_file, &mut out)?,
        (Command::Write, Some(csv_file)) => {
            let script = settings.script_mode || !io::stdin().is_terminal();
            let mut input: Box<dyn InputSource> = if script {
                Box::new(LineInput::new(io::stdin().lock(), io::stdout()))
            } else {
                Box::new(TerminalInput::new())
            };
            commands::run_write(&csv_file, &settings, input.as_mut(), &mut out, &SystemClock)?;
        }
        (command, None) => {
            return Err(CliError::Usage(format!(
                "CSV file is required for {command} command"
            )))
        }
    }
    Ok(())
}

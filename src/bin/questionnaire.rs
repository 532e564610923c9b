use std::process;

use clap::Parser;

use questionnaire::cli::{self, output, Cli};
use questionnaire::errors::CliError;
use questionnaire::init;

fn main() {
    init();

    if let Err(err) = cli::run(Cli::parse()) {
        match &err {
            CliError::Usage(message) => eprintln!("error: {message}"),
            other => output::error(other),
        }
        process::exit(err.exit_code());
    }
}

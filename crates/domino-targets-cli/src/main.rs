//! `dominoes`: generate printable sheets of unique domino fiducials.
//!
//! ```text
//! dominoes generate 8 4 2 1.0 out/ --seed 42 --format svg,pdf,png,json
//! dominoes enumerate --json
//! dominoes identify 0x8F8F --manifest out/dominoes-0.json
//! ```

mod args;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use domino_targets_core::{init_with_level, level_from_verbosity};

use crate::args::{Cli, Command};
use crate::error::CliError;

fn init_logging(cli: &Cli) {
    #[cfg(feature = "tracing")]
    if cli.log_json {
        domino_targets_core::init_tracing(true);
        return;
    }
    if let Err(err) = init_with_level(level_from_verbosity(cli.verbose)) {
        eprintln!("failed to install logger: {err}");
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Generate(args) => commands::generate(args),
        Command::Enumerate(args) => commands::enumerate(args),
        Command::Identify(args) => commands::identify(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

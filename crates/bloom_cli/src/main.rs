//! Bloomify Labs CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (an unknown lab number is not an error)
//! - 1: General error
//! - 2: Invalid configuration

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod menu;

use cli::Cli;
use menu::MenuOutcome;

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_CONFIG: u8 = 2;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so lab output on stdout stays clean
    let default_filter = if cli.verbose { "warn,bloom=debug" } else { "warn" };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            return ExitCode::from(ExitCodes::INVALID_CONFIG);
        }
    };
    debug!("Using configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = menu::run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &config,
        cli.lab.as_deref(),
    );

    match result {
        Ok(outcome) => {
            match outcome {
                MenuOutcome::Ran(lab) => debug!("Finished lab {}", lab.label()),
                MenuOutcome::Unknown(choice) => debug!("No lab matches {:?}", choice),
            }
            ExitCode::from(ExitCodes::SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}

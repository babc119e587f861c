//! Gitmate: Interactive CLI helper for everyday git workflows.
//!
//! This is the main entry point for the `gitmate` CLI. It parses arguments,
//! dispatches to the appropriate workflow, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod exit_codes;
pub mod git;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

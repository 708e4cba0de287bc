//! Mapty CLI - Command-line interface
//!
//! This binary is the application around the workout store: it collects
//! inputs, records workouts, and renders the stored list.

mod app;
mod cli;
mod commands;
mod config_loader;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use errors::{from_anyhow, CliError};
use output::OutputWriter;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json = cli.json;

    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if json {
                OutputWriter::new(true).error(format!("{:#}", error));
            } else {
                match error.downcast::<CliError>() {
                    Ok(cli_error) => cli_error.display(),
                    Err(error) => from_anyhow(error).display(),
                }
            }
            ExitCode::FAILURE
        }
    }
}

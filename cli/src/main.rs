//! # payroll
//!
//! Terminal front end for the payroll estimation sheet. It owns everything
//! the engine leaves to its caller: loading and saving the sheet, coercing
//! typed-in numbers, generating row ids and confirming a clear.
//!
//! ```bash
//! payroll add --name "Ada Lovelace" --hours 40 --rate 25 --ot-hours 5 --bonus 100
//! payroll company "Acme Inc."
//! payroll show
//! payroll export --out november.csv
//! payroll clear --yes
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::Cli;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting payroll");

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

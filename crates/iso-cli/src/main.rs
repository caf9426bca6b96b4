//! ISO-3166 table generator CLI.
//!
//! Reads the country dataset and prints a fixed-size Rust array of
//! `(alpha-2, name)` pairs, sorted by code.
//!
//! # Examples
//!
//! ```bash
//! # Print the table for the bundled dataset
//! iso3166-gen > src/country_codes.rs
//!
//! # Use another dataset and write straight to a file
//! iso3166-gen --input vendor/all.json --output src/country_codes.rs
//! ```
//!
//! Logs go to stderr only; stdout carries nothing but the generated code.

use anyhow::Result;
use clap::Parser;
use iso_cli::{Cli, exit_code_for, run};
use iso_core::cli::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {e:#}");
    }

    let exit_code = match run(&cli) {
        Ok(summary) => {
            debug!(
                records = summary.record_count,
                bytes = summary.bytes_written,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// `RUST_LOG` controls the filter (default `info`); `--verbose` forces
/// debug level. Everything is written to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

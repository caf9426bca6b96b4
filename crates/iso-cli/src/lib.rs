//! ISO-3166 table generator CLI library.
//!
//! Exposes argument parsing and the run loop so both can be tested without
//! spawning the binary.
//!
//! Configuration is layered: built-in defaults, then the optional TOML file
//! given with `--config`, then individual flags.

use anyhow::{Context, Result};
use clap::Parser;
use iso_codegen::{GenerationSummary, TableGenerator};
use iso_core::GeneratorConfig;
use iso_core::cli::ExitCode;
use std::path::PathBuf;
use tracing::debug;

/// Generate a fixed-size Rust array of ISO-3166 alpha-2 codes and names.
///
/// Reads `data/iso3166_all.json` and prints the array to standard output
/// when run without arguments.
#[derive(Parser, Debug)]
#[command(name = "iso3166-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the JSON dataset [default: data/iso3166_all.json]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the generated code to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML configuration file (input, output, array-name, entries-per-line)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Identifier of the generated static array [default: `COUNTRY_CODES`]
    #[arg(long)]
    pub array_name: Option<String>,

    /// Number of entries per body line [default: 1]
    #[arg(long)]
    pub entries_per_line: Option<usize>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the generator configuration from the config file and flags.
    ///
    /// # Errors
    ///
    /// Returns [`iso_core::Error::ConfigError`] if the config file cannot be
    /// read or the resulting configuration is invalid.
    pub fn to_config(&self) -> iso_core::Result<GeneratorConfig> {
        let base = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        let mut builder = base.into_builder();
        if let Some(input) = &self.input {
            builder = builder.input(input);
        }
        if let Some(output) = &self.output {
            builder = builder.output_file(output);
        }
        if let Some(array_name) = &self.array_name {
            builder = builder.array_name(array_name);
        }
        if let Some(entries_per_line) = self.entries_per_line {
            builder = builder.entries_per_line(entries_per_line);
        }
        builder.build()
    }
}

/// Resolves the configuration and runs the generator.
///
/// # Errors
///
/// Returns an error wrapping the underlying [`iso_core::Error`] if the
/// configuration is invalid or generation fails.
pub fn run(cli: &Cli) -> Result<GenerationSummary> {
    let config = cli.to_config().context("invalid configuration")?;
    debug!(?config, "resolved configuration");

    let generator = TableGenerator::from_config(&config)?;
    generator
        .run(&config)
        .with_context(|| format!("failed to generate table from {}", config.input.display()))
}

/// Maps a run failure to the process exit code.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<iso_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::from_error)
}

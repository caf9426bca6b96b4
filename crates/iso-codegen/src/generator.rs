//! The table generation pipeline: load, project, sort, render, emit.
//!
//! Rendering always completes in memory before anything is written, so a
//! failed run never leaves partial output behind.
//!
//! # Examples
//!
//! ```no_run
//! use iso_codegen::TableGenerator;
//! use iso_core::GeneratorConfig;
//!
//! # fn main() -> iso_core::Result<()> {
//! let config = GeneratorConfig::default();
//! let generator = TableGenerator::from_config(&config)?;
//! let summary = generator.run(&config)?;
//! eprintln!("wrote {} records to {}", summary.record_count, summary.target);
//! # Ok(())
//! # }
//! ```

use crate::loader;
use crate::renderer::{RustArrayRenderer, TableRenderer};
use iso_core::{CountryTable, Error, GeneratorConfig, OutputTarget, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a successful [`TableGenerator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of pairs in the emitted array
    pub record_count: usize,
    /// Number of bytes written, including the terminating newline
    pub bytes_written: usize,
    /// Where the output went
    pub target: OutputTarget,
}

/// Turns a dataset into a rendered country table.
///
/// Generic over the [`TableRenderer`] so the same load and sort logic can
/// feed any output syntax.
#[derive(Debug)]
pub struct TableGenerator<R = RustArrayRenderer> {
    renderer: R,
}

impl TableGenerator<RustArrayRenderer> {
    /// Creates a generator rendering a Rust array as configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid, or
    /// [`Error::RenderError`] if the template engine cannot be created.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self::with_renderer(RustArrayRenderer::from_config(config)?))
    }
}

impl<R: TableRenderer> TableGenerator<R> {
    /// Creates a generator using the given renderer.
    pub const fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Returns the renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Loads the dataset at `input` and sorts it into a table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLoadError`] or [`Error::SchemaError`] if the
    /// dataset cannot be loaded.
    pub fn load_table(&self, input: impl AsRef<Path>) -> Result<CountryTable> {
        let records = loader::load_records(input)?;
        Ok(CountryTable::from_records(records))
    }

    /// Renders an already sorted table.
    ///
    /// # Errors
    ///
    /// Propagates any renderer failure.
    pub fn render_table(&self, table: &CountryTable) -> Result<String> {
        self.renderer.render(table)
    }

    /// Loads, sorts and renders the dataset at `input`.
    ///
    /// Returns the rendered literal without the trailing newline added on
    /// emit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLoadError`] or [`Error::SchemaError`] for a bad
    /// dataset, or any renderer failure.
    pub fn generate(&self, input: impl AsRef<Path>) -> Result<String> {
        let table = self.load_table(input)?;
        self.render_table(&table)
    }

    /// Runs the whole pipeline and writes the result to `config.output`.
    ///
    /// # Errors
    ///
    /// Returns the first error of the pipeline. Nothing is written unless
    /// rendering succeeded.
    pub fn run(&self, config: &GeneratorConfig) -> Result<GenerationSummary> {
        let table = self.load_table(&config.input)?;
        let rendered = self.render_table(&table)?;
        debug!(
            records = table.len(),
            bytes = rendered.len(),
            "rendered country table"
        );

        let bytes_written = match &config.output {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                write_output(stdout.lock(), &rendered)
            }
            OutputTarget::File(path) => write_file_atomic(path, &rendered),
        }
        .map_err(|source| Error::OutputError {
            target: config.output.to_string(),
            source,
        })?;

        info!(
            records = table.len(),
            target = %config.output,
            "generated country table"
        );

        Ok(GenerationSummary {
            record_count: table.len(),
            bytes_written,
            target: config.output.clone(),
        })
    }
}

/// Writes the rendered text followed by a newline and flushes the writer.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
///
/// # Examples
///
/// ```
/// use iso_codegen::generator::write_output;
///
/// let mut buf = Vec::new();
/// let written = write_output(&mut buf, "\npub static X: [(&'static str, &'static str); 0] = [\n];\n").unwrap();
/// assert_eq!(written, buf.len());
/// assert!(buf.ends_with(b"];\n\n"));
/// ```
pub fn write_output<W: Write>(mut writer: W, rendered: &str) -> std::io::Result<usize> {
    writer.write_all(rendered.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(rendered.len() + 1)
}

/// Writes to a sibling temp file, then renames it over `path`.
///
/// An existing file at `path` is only replaced once the whole output is on
/// disk. The temp file is removed if writing fails.
fn write_file_atomic(path: &Path, rendered: &str) -> std::io::Result<usize> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = std::fs::File::create(&temp_path)
        .and_then(|file| write_output(std::io::BufWriter::new(file), rendered))
        .and_then(|written| std::fs::rename(&temp_path, path).map(|()| written));

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}

//! Rendering strategies for a sorted [`CountryTable`].
//!
//! The generator only knows the [`TableRenderer`] capability; the concrete
//! output syntax lives behind it. [`RustArrayRenderer`] is the shipped
//! implementation and produces a typed fixed-length Rust array:
//!
//! ```text
//!
//! pub static COUNTRY_CODES: [(&'static str, &'static str); 2] = [
//!     ("AD", "Andorra"),
//!     ("US", "United States"),
//! ];
//! ```
//!
//! Every entry is followed by `, ` including the last one on a line, so
//! body lines end with a trailing space. Names are inserted verbatim: a
//! name containing `"` produces a literal that does not compile.

use crate::template_engine::{RUST_COUNTRY_TABLE, TemplateEngine};
use iso_core::{
    CountryRecord, CountryTable, DEFAULT_ARRAY_NAME, DEFAULT_ENTRIES_PER_LINE, Error,
    GeneratorConfig, Result,
};
use serde::Serialize;

/// Capability to render a sorted table of pairs as text.
#[cfg_attr(test, mockall::automock)]
pub trait TableRenderer {
    /// Renders the whole table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if the table cannot be rendered.
    fn render(&self, table: &CountryTable) -> Result<String>;
}

impl<R: TableRenderer + ?Sized> TableRenderer for &R {
    fn render(&self, table: &CountryTable) -> Result<String> {
        (**self).render(table)
    }
}

impl<R: TableRenderer + ?Sized> TableRenderer for Box<R> {
    fn render(&self, table: &CountryTable) -> Result<String> {
        (**self).render(table)
    }
}

/// Template context for [`RUST_COUNTRY_TABLE`].
#[derive(Debug, Serialize)]
struct RustTableContext<'r> {
    array_name: &'r str,
    count: usize,
    lines: Vec<&'r [CountryRecord]>,
}

/// Renders a `pub static` array of `(&'static str, &'static str)` pairs.
///
/// # Examples
///
/// ```
/// use iso_codegen::{RustArrayRenderer, TableRenderer};
/// use iso_core::{CountryRecord, CountryTable};
///
/// let table = CountryTable::from_records(vec![CountryRecord::new("AD", "Andorra")]);
/// let out = RustArrayRenderer::new().unwrap().render(&table).unwrap();
///
/// assert_eq!(
///     out,
///     "\npub static COUNTRY_CODES: [(&'static str, &'static str); 1] = [\n    (\"AD\", \"Andorra\"), \n];\n"
/// );
/// ```
#[derive(Debug)]
pub struct RustArrayRenderer {
    engine: TemplateEngine<'static>,
    array_name: String,
    entries_per_line: usize,
}

impl RustArrayRenderer {
    /// Creates a renderer with the default array name and one entry per line.
    ///
    /// # Errors
    ///
    /// Returns error if the template engine cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            entries_per_line: DEFAULT_ENTRIES_PER_LINE,
        })
    }

    /// Creates a renderer from the rendering options of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new()?
            .with_array_name(config.array_name.clone())
            .with_entries_per_line(config.entries_per_line))
    }

    /// Sets the identifier of the generated array.
    #[must_use]
    pub fn with_array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    /// Sets how many entries share a body line.
    #[must_use]
    pub fn with_entries_per_line(mut self, count: usize) -> Self {
        self.entries_per_line = count;
        self
    }

    /// Returns the identifier of the generated array.
    #[must_use]
    pub fn array_name(&self) -> &str {
        &self.array_name
    }

    /// Returns how many entries share a body line.
    #[must_use]
    pub const fn entries_per_line(&self) -> usize {
        self.entries_per_line
    }
}

impl TableRenderer for RustArrayRenderer {
    fn render(&self, table: &CountryTable) -> Result<String> {
        if self.entries_per_line == 0 {
            return Err(Error::RenderError {
                message: "entries per line must be at least 1".to_string(),
            });
        }

        let context = RustTableContext {
            array_name: &self.array_name,
            count: table.len(),
            lines: table.records().chunks(self.entries_per_line).collect(),
        };

        self.engine.render(RUST_COUNTRY_TABLE, &context)
    }
}

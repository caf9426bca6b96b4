//! Generator configuration.
//!
//! Replaces any notion of a location baked into the program: the dataset
//! path, the output destination and the rendering knobs are all explicit
//! values handed to the generator.
//!
//! Configuration can be assembled in code with [`GeneratorConfig::builder`]
//! or read from a TOML file:
//!
//! ```toml
//! input = "data/iso3166_all.json"
//! output = "src/country_codes.rs"
//! array-name = "COUNTRY_CODES"
//! entries-per-line = 1
//! ```
//!
//! Relative paths are resolved against the working directory.
//!
//! # Examples
//!
//! ```
//! use iso_core::{GeneratorConfig, OutputTarget};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.array_name, "COUNTRY_CODES");
//! assert_eq!(config.entries_per_line, 1);
//! assert_eq!(config.output, OutputTarget::Stdout);
//!
//! let custom = GeneratorConfig::builder()
//!     .input("fixtures/countries.json")
//!     .array_name("REGIONS")
//!     .build()
//!     .unwrap();
//! assert_eq!(custom.array_name, "REGIONS");
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Dataset location used when none is configured.
pub const DEFAULT_INPUT_PATH: &str = "data/iso3166_all.json";

/// Name of the generated static array when none is configured.
pub const DEFAULT_ARRAY_NAME: &str = "COUNTRY_CODES";

/// Number of entries rendered on each body line when none is configured.
pub const DEFAULT_ENTRIES_PER_LINE: usize = 1;

/// Where the rendered literal is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated once rendering succeeded
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the JSON dataset.
    ///
    /// Default: `data/iso3166_all.json`
    pub input: PathBuf,

    /// Destination of the rendered literal.
    ///
    /// Default: standard output
    pub output: OutputTarget,

    /// Identifier of the generated static array.
    ///
    /// Default: `COUNTRY_CODES`
    pub array_name: String,

    /// How many `("CODE", "Name"), ` entries share one body line.
    ///
    /// Default: 1
    pub entries_per_line: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: OutputTarget::Stdout,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            entries_per_line: DEFAULT_ENTRIES_PER_LINE,
        }
    }
}

/// On-disk layout of a configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    array_name: Option<String>,
    entries_per_line: Option<usize>,
}

impl GeneratorConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Turns this configuration back into a builder, so individual values
    /// can be overridden (e.g. command-line flags over a config file).
    #[must_use]
    pub fn into_builder(self) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder { config: self }
    }

    /// Parses a TOML configuration document and applies it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the document is not valid TOML,
    /// contains unknown keys, or yields an invalid configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_toml_str("entries-per-line = 4").unwrap();
    /// assert_eq!(config.entries_per_line, 4);
    /// assert_eq!(config.array_name, "COUNTRY_CODES");
    ///
    /// assert!(GeneratorConfig::from_toml_str("colour = \"blue\"").is_err());
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(document).map_err(|e| Error::ConfigError {
            message: format!("invalid configuration file: {e}"),
        })?;

        let mut builder = Self::builder();
        if let Some(input) = file.input {
            builder = builder.input(input);
        }
        if let Some(output) = file.output {
            builder = builder.output_file(output);
        }
        if let Some(array_name) = file.array_name {
            builder = builder.array_name(array_name);
        }
        if let Some(entries_per_line) = file.entries_per_line {
            builder = builder.entries_per_line(entries_per_line);
        }
        builder.build()
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or its
    /// contents are rejected by [`GeneratorConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("cannot read configuration file {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&document)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - `array_name` is not a valid Rust identifier
    /// - `entries_per_line` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_core::GeneratorConfig;
    ///
    /// let mut config = GeneratorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.array_name = "country codes".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.array_name) {
            return Err(Error::ConfigError {
                message: format!(
                    "array name '{}' is not a valid identifier",
                    self.array_name
                ),
            });
        }

        if self.entries_per_line == 0 {
            return Err(Error::ConfigError {
                message: "entries per line must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// ASCII identifier check: a letter or underscore, then letters, digits or
/// underscores. A lone `_` is rejected.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if name == "_" || !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Builder for [`GeneratorConfig`].
///
/// # Examples
///
/// ```
/// use iso_core::{GeneratorConfigBuilder, OutputTarget};
///
/// let config = GeneratorConfigBuilder::new()
///     .output_file("src/country_codes.rs")
///     .entries_per_line(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output, OutputTarget::File("src/country_codes.rs".into()));
/// assert_eq!(config.entries_per_line, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder seeded with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dataset path.
    #[must_use]
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    /// Sets the output target.
    #[must_use]
    pub fn output(mut self, target: OutputTarget) -> Self {
        self.config.output = target;
        self
    }

    /// Writes the output to a file instead of standard output.
    #[must_use]
    pub fn output_file(self, path: impl Into<PathBuf>) -> Self {
        self.output(OutputTarget::File(path.into()))
    }

    /// Sets the identifier of the generated array.
    #[must_use]
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.config.array_name = name.into();
        self
    }

    /// Sets how many entries share a body line.
    #[must_use]
    pub fn entries_per_line(mut self, count: usize) -> Self {
        self.config.entries_per_line = count;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if validation fails.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

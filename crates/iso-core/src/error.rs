//! Error types for the ISO-3166 table generator.
//!
//! Every failure is fatal: the generator either emits the full literal or
//! nothing at all, so errors carry enough context to fix the input and
//! re-run.
//!
//! # Examples
//!
//! ```
//! use iso_core::{Error, Result};
//!
//! fn check_array_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "array name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_array_name("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the table generator.
///
/// All errors in the workspace use this type, providing consistent error
/// handling across the codegen and CLI crates.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset could not be loaded.
    ///
    /// Raised when the dataset file is missing, unreadable, is not valid
    /// JSON, or its top level is not a list of records.
    #[error("Failed to load dataset {}: {reason}", .path.display())]
    DataLoadError {
        /// Path of the dataset that failed to load
        path: PathBuf,
        /// Short description of what went wrong
        reason: String,
        /// Underlying I/O or parse error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record in the dataset does not have the expected shape.
    ///
    /// Raised when a record is missing `alpha-2` or `name`, or carries a
    /// value of the wrong type for one of them.
    #[error("Invalid record at index {index}: {message}")]
    SchemaError {
        /// Zero-based position of the offending record in the dataset
        index: usize,
        /// Description of the schema violation
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when the generator configuration is invalid or a
    /// configuration file cannot be read.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Render error: {message}")]
    RenderError {
        /// Description of the rendering failure
        message: String,
    },

    /// The rendered output could not be written.
    #[error("Failed to write output to {target}")]
    OutputError {
        /// Human-readable name of the output target
        target: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a dataset load error.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_core::Error;
    ///
    /// let err = Error::DataLoadError {
    ///     path: "missing.json".into(),
    ///     reason: "file not found".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_data_load_error());
    /// ```
    #[must_use]
    pub const fn is_data_load_error(&self) -> bool {
        matches!(self, Self::DataLoadError { .. })
    }

    /// Returns `true` if this is a record schema error.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_core::Error;
    ///
    /// let err = Error::SchemaError {
    ///     index: 3,
    ///     message: "missing field `name`".to_string(),
    /// };
    /// assert!(err.is_schema_error());
    /// ```
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::SchemaError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a render error.
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }

    /// Returns `true` if this is an output error.
    #[must_use]
    pub const fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputError { .. })
    }

    /// Returns `true` if the error was caused by the input dataset.
    ///
    /// Both load and schema failures are fixed by correcting the dataset
    /// and re-running the generator.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        self.is_data_load_error() || self.is_schema_error()
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use iso_core::{Error, Result};
///
/// fn entries_per_line(value: usize) -> Result<usize> {
///     if value == 0 {
///         return Err(Error::ConfigError {
///             message: "entries per line must be positive".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(entries_per_line(1).is_ok());
/// assert!(entries_per_line(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

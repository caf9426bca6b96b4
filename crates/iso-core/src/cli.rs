//! CLI-specific types.
//!
//! # Examples
//!
//! ```
//! use iso_core::cli::ExitCode;
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! assert!(code.is_success());
//! ```

use crate::Error;
use std::fmt;

/// CLI exit code with semantic meaning.
///
/// Success is 0, errors are non-zero with specific meanings.
///
/// # Examples
///
/// ```
/// use iso_core::Error;
/// use iso_core::cli::ExitCode;
///
/// let err = Error::SchemaError {
///     index: 0,
///     message: "missing field `name`".to_string(),
/// };
/// assert_eq!(ExitCode::from_error(&err), ExitCode::DATA_ERROR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error, e.g. the output could not be written (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid arguments or configuration (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Dataset could not be loaded or a record is malformed (exit code 3).
    pub const DATA_ERROR: Self = Self(3);

    /// Maps a generator error to the exit code reported to the invoker.
    #[must_use]
    pub const fn from_error(error: &Error) -> Self {
        if error.is_input_error() {
            Self::DATA_ERROR
        } else if error.is_config_error() {
            Self::INVALID_INPUT
        } else {
            Self::ERROR
        }
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl From<&Error> for ExitCode {
    fn from(error: &Error) -> Self {
        Self::from_error(error)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

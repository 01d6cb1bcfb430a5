//! Error types for the abspath library.
//!
//! This module provides the error hierarchy for all operations in the
//! abspath library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with an abspath error.
///
/// # Examples
///
/// ```
/// use abspath::{AbsolutePath, Result};
///
/// fn config_root(raw: &str) -> Result<AbsolutePath> {
///     AbsolutePath::with_style(raw, abspath::PathStyle::Posix)
/// }
///
/// assert!(config_root("/etc").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the abspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not normalize to an absolute path.
    #[error("path is not absolute: {input}")]
    NotAbsolute {
        /// The raw input as supplied by the caller.
        input: String,
    },

    /// The input cannot represent a path at all.
    #[error("invalid path {input:?}: {reason}")]
    InvalidPath {
        /// The raw input as supplied by the caller.
        input: String,
        /// The reason the input was rejected.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a relative (non-absolute) input.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::Error;
    ///
    /// let err = Error::NotAbsolute { input: "relative/path".to_string() };
    /// assert!(err.is_not_absolute());
    /// ```
    #[must_use]
    pub fn is_not_absolute(&self) -> bool {
        matches!(self, Self::NotAbsolute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_absolute_error() {
        let err = Error::NotAbsolute {
            input: "relative/path".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not absolute"));
        assert!(display.contains("relative/path"));
        assert!(err.is_not_absolute());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            input: "a\0b".to_string(),
            reason: "contains a NUL character".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("NUL"));
        assert!(!err.is_not_absolute());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "ABSPATH_STYLE".to_string(),
            message: "must be 'posix' or 'windows'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("ABSPATH_STYLE"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }
}

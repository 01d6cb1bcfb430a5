//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps them to exit codes.

use abspath::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: A path argument is not absolute
    /// - 4: A path argument cannot represent a path
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::NotAbsolute { .. } => 1,
                LibError::InvalidPath { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
            },
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_absolute = CliError::from(LibError::NotAbsolute {
            input: "a".to_string(),
        });
        assert_eq!(not_absolute.exit_code(), 1);

        let invalid = CliError::from(LibError::InvalidPath {
            input: "a\0".to_string(),
            reason: "NUL".to_string(),
        });
        assert_eq!(invalid.exit_code(), 4);

        let validation = CliError::from(LibError::Validation {
            field: "ABSPATH_STYLE".to_string(),
            message: "bad".to_string(),
        });
        assert_eq!(validation.exit_code(), 7);

        let io = CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.exit_code(), 5);
    }

    #[test]
    fn test_display_passes_through_library_message() {
        let err = CliError::from(LibError::NotAbsolute {
            input: "rel".to_string(),
        });
        assert_eq!(err.to_string(), "path is not absolute: rel");
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the upcase crate.
///
/// Read and write failures keep the offending path; sources are stored as
/// rendered messages so the enum stays `Clone`.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Input path does not exist at read time.
    #[error("The file '{path}' was not found")]
    NotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// Failure while reading or writing the interactive prompts.
    #[error("Failed to read input from the terminal: {message}")]
    Prompt {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a not-found error for the given path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a prompt error from a terminal IO failure.
    #[must_use]
    pub fn prompt(source: std::io::Error) -> Self {
        Self::Prompt {
            message: source.to_string(),
        }
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("/tmp/missing.txt");
        assert!(err.is_not_found());
        assert!(!err.is_io());
        assert!(err.to_string().contains("/tmp/missing.txt"));
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io("/tmp/test.txt", io_err);
        assert!(err.is_io());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/tmp/test.txt"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("input_path is required");
        assert!(err.is_config());
        assert!(err.to_string().contains("input_path is required"));
    }

    #[test]
    fn test_prompt_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err = Error::prompt(io_err);
        assert!(err.to_string().contains("terminal"));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::not_found("a.txt");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}

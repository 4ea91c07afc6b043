use crate::error::Error;
use std::path::PathBuf;

/// Tagged result of a transform run.
///
/// Failures are values, not panics: the transformer catches every read and
/// write error and folds it into one of the two failure variants. Exactly one
/// variant is produced per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written in full.
    ///
    /// Carries both texts so callers can display them without re-reading
    /// either file.
    Success {
        /// Content as read from the input file
        original: String,
        /// Uppercased content as written to the output file
        modified: String,
    },

    /// The input path did not exist at read time; nothing was written.
    NotFound {
        /// The missing input path
        path: PathBuf,
    },

    /// Any other I/O failure during read or write.
    ///
    /// A failed write may leave a partial file at the output path; it is
    /// reported, not cleaned up.
    IoFailure {
        /// Description of the underlying error
        message: String,
    },
}

impl Outcome {
    /// Returns true if the transform succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if the input file was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if an I/O failure aborted the transform.
    #[must_use]
    pub const fn is_io_failure(&self) -> bool {
        matches!(self, Self::IoFailure { .. })
    }
}

impl From<Error> for Outcome {
    /// Folds an operation error into its outcome variant.
    ///
    /// A missing input keeps the offending path; every other error becomes an
    /// [`Outcome::IoFailure`] carrying the rendered description.
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound { path } => Self::NotFound { path },
            other => Self::IoFailure {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let success = Outcome::Success {
            original: "a".to_string(),
            modified: "A".to_string(),
        };
        assert!(success.is_success());
        assert!(!success.is_not_found());
        assert!(!success.is_io_failure());

        let not_found = Outcome::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_success());

        let failure = Outcome::IoFailure {
            message: "disk error".to_string(),
        };
        assert!(failure.is_io_failure());
        assert!(!failure.is_success());
    }

    #[test]
    fn test_outcome_from_not_found_error() {
        let outcome = Outcome::from(Error::not_found("missing.txt"));

        assert_eq!(
            outcome,
            Outcome::NotFound {
                path: PathBuf::from("missing.txt")
            }
        );
    }

    #[test]
    fn test_outcome_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let outcome = Outcome::from(Error::io("out.txt", io_err));

        match outcome {
            Outcome::IoFailure { message } => {
                assert!(message.contains("out.txt"));
                assert!(message.contains("denied"));
            }
            other => panic!("expected IoFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_success_carries_both_contents() {
        let outcome = Outcome::Success {
            original: "hello world".to_string(),
            modified: "HELLO WORLD".to_string(),
        };

        if let Outcome::Success { original, modified } = outcome {
            assert_eq!(original, "hello world");
            assert_eq!(modified, "HELLO WORLD");
        } else {
            panic!("expected Success");
        }
    }
}

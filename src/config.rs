use crate::error::{Error, Result};
use std::path::PathBuf;

/// Configuration for a single transform run.
///
/// Carries the two caller-supplied paths. Use [`Config::new`] when both are
/// at hand, or [`Config::builder()`] for incremental construction.
///
/// Paths are trusted as given: existence, emptiness, and traversal are not
/// validated here. A bad input path surfaces as a not-found outcome when the
/// transform runs, not as a configuration error.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Path of the file to read
    pub input_path: PathBuf,

    /// Path of the file to create or overwrite
    pub output_path: PathBuf,
}

impl Config {
    /// Creates a configuration from the two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use upcase::Config;
    ///
    /// let config = Config::new("notes.txt", "notes_upper.txt");
    /// assert_eq!(config.input_path.to_str(), Some("notes.txt"));
    /// ```
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use upcase::Config;
    ///
    /// let config = Config::builder()
    ///     .input_path("notes.txt")
    ///     .output_path("notes_upper.txt")
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Sets the path of the file to read.
    #[must_use]
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the path of the file to create or overwrite.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either path was never set. Empty paths are
    /// accepted and fail later as a not-found outcome.
    pub fn build(self) -> Result<Config> {
        let input_path = self
            .input_path
            .ok_or_else(|| Error::config("input_path is required"))?;
        let output_path = self
            .output_path
            .ok_or_else(|| Error::config("output_path is required"))?;

        Ok(Config {
            input_path,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_sets_paths() {
        let config = Config::new("in.txt", "out.txt");
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_builder_builds_with_both_paths() {
        let config = Config::builder()
            .input_path("in.txt")
            .output_path("out.txt")
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_builder_requires_input_path() {
        let result = Config::builder().output_path("out.txt").build();

        let err = result.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("input_path"));
    }

    #[test]
    fn test_builder_requires_output_path() {
        let result = Config::builder().input_path("in.txt").build();

        let err = result.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("output_path"));
    }

    #[test]
    fn test_empty_paths_are_accepted() {
        // Paths are caller-supplied and trusted; emptiness is not rejected.
        let config = Config::builder()
            .input_path("")
            .output_path("")
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::new());
    }
}

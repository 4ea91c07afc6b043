use std::path::PathBuf;

/// A text document loaded fully into memory.
///
/// Created when the read step succeeds and discarded once the run completes;
/// nothing is retained between runs.
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// Path the content was read from
    pub path: PathBuf,

    /// Full text content
    pub content: String,
}

impl InputDocument {
    /// Creates a new input document.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Derives the output document by uppercasing the content.
    ///
    /// Uses the standard Unicode uppercase mapping ([`str::to_uppercase`]);
    /// no locale-specific casing is applied, so the result is the same on
    /// every platform.
    #[must_use]
    pub fn to_uppercase(&self, output_path: impl Into<PathBuf>) -> OutputDocument {
        OutputDocument {
            path: output_path.into(),
            content: self.content.to_uppercase(),
        }
    }

    /// Returns the content size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns the number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// The uppercase transform of an [`InputDocument`].
///
/// Written to disk exactly once and not retained afterwards.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    /// Path the content will be written to
    pub path: PathBuf,

    /// Transformed text content
    pub content: String,
}

impl OutputDocument {
    /// Creates a document to be written at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the content size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_derivation() {
        let input = InputDocument::new("in.txt", "hello world");
        let output = input.to_uppercase("out.txt");

        assert_eq!(output.content, "HELLO WORLD");
        assert_eq!(output.path, PathBuf::from("out.txt"));
        // The input document is untouched by the derivation.
        assert_eq!(input.content, "hello world");
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        for content in ["hello world", "MiXeD CaSe 123 !?", "ßeta straße", ""] {
            let once = content.to_uppercase();
            let twice = once.to_uppercase();
            assert_eq!(once, twice, "uppercase must be idempotent for {content:?}");
        }
    }

    #[test]
    fn test_uppercase_expands_special_mappings() {
        let input = InputDocument::new("in.txt", "straße");
        let output = input.to_uppercase("out.txt");

        assert_eq!(output.content, "STRASSE");
    }

    #[test]
    fn test_digits_and_punctuation_are_unchanged() {
        let input = InputDocument::new("in.txt", "abc 123 -!?");
        let output = input.to_uppercase("out.txt");

        assert_eq!(output.content, "ABC 123 -!?");
    }

    #[test]
    fn test_empty_content() {
        let input = InputDocument::new("in.txt", "");
        let output = input.to_uppercase("out.txt");

        assert!(input.content.is_empty());
        assert_eq!(output.content, "");
        assert_eq!(output.size_bytes(), 0);
    }

    #[test]
    fn test_size_and_line_helpers() {
        let input = InputDocument::new("in.txt", "line1\nline2\nline3");

        assert_eq!(input.size_bytes(), 17);
        assert_eq!(input.line_count(), 3);
    }
}

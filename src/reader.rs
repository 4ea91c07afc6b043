use crate::document::InputDocument;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::trace;

/// Reads the input file into an [`InputDocument`].
///
/// The file is read exactly once, in full. The path is used as given; no
/// canonicalization or existence probing happens ahead of the read, so there
/// is no window between a check and the open.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path does not exist, and [`Error::Io`]
/// for every other failure (permissions, the path being a directory, content
/// that is not valid UTF-8).
pub(crate) fn read_document(path: &Path) -> Result<InputDocument> {
    trace!(path = %path.display(), "Reading input file");

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::not_found(path)
        } else {
            Error::io(path, e)
        }
    })?;

    Ok(InputDocument::new(path, content))
}

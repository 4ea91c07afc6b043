use crate::document::OutputDocument;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use tracing::trace;

/// Writes an [`OutputDocument`] to its path.
///
/// The file is created (or truncated) and written in one pass. There is no
/// temp-file-and-rename step: if the write fails midway, whatever made it to
/// disk stays at the output path and the failure is reported to the caller.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or the content cannot
/// be written in full.
pub(crate) fn write_document(document: &OutputDocument) -> Result<()> {
    trace!(path = %document.path.display(), bytes = document.size_bytes(), "Writing output file");

    let mut file = File::create(&document.path).map_err(|e| Error::io(&document.path, e))?;
    file.write_all(document.content.as_bytes())
        .map_err(|e| Error::io(&document.path, e))?;

    Ok(())
}

use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Prompt shown before reading the input filename.
pub(crate) const INPUT_PROMPT: &str = "Enter the name of the file to read (e.g., 'notes.txt'): ";

/// Prompt shown before reading the output filename.
pub(crate) const OUTPUT_PROMPT: &str =
    "Enter the name for the new file (e.g., 'notes_upper.txt'): ";

/// Asks for the input and output filenames on the terminal, in that order.
///
/// Each prompt is flushed before the answer is read so it appears even when
/// stdout is line-buffered. Answers are trimmed of surrounding whitespace
/// (including a trailing CRLF) but otherwise used verbatim; an empty answer
/// becomes an empty path and surfaces later as a read or write failure.
///
/// # Errors
///
/// Returns [`Error::Prompt`] if stdin or stdout fails, for example when the
/// terminal goes away mid-prompt.
pub fn prompt_for_paths() -> Result<(PathBuf, PathBuf)> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = std::io::stdout();

    let input_path = read_path(&mut reader, &mut stdout, INPUT_PROMPT)?;
    let output_path = read_path(&mut reader, &mut stdout, OUTPUT_PROMPT)?;

    Ok((input_path, output_path))
}

/// Writes `prompt`, flushes, and reads one trimmed line as a path.
///
/// Generic over the streams so tests can drive it with in-memory buffers. At
/// end of input `read_line` returns zero bytes and the result is an empty
/// path rather than an error.
fn read_path<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<PathBuf> {
    write!(writer, "{prompt}").map_err(Error::prompt)?;
    writer.flush().map_err(Error::prompt)?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(Error::prompt)?;

    Ok(PathBuf::from(line.trim()))
}

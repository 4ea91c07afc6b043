use crate::outcome::Outcome;
use std::io::{self, Write};

/// Writes the console report for a finished run.
///
/// Success shows both the original and the transformed text so the user can
/// eyeball the change without opening either file. Failures print a short
/// explanation and, for a missing input, a hint. Always writes exactly one
/// report; a failed console write is ignored rather than aborting the run.
///
/// Generic over the sink so tests can capture the report in a buffer.
pub(crate) fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) {
    let _ = write_outcome(out, outcome);
}

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Success { original, modified } => {
            writeln!(out, "---")?;
            writeln!(out, "The original content was:")?;
            writeln!(out, "{original}")?;
            writeln!(out, "\n---")?;
            writeln!(out, "The modified content is:")?;
            writeln!(out, "{modified}")?;
            writeln!(out, "\n✓ All operations completed successfully!")?;
        }
        Outcome::NotFound { path } => {
            writeln!(out, "✗ Error: The file '{}' was not found.", path.display())?;
            writeln!(out, "Please check the filename and try again.")?;
        }
        Outcome::IoFailure { message } => {
            writeln!(
                out,
                "✗ An I/O error occurred while processing the file: {message}"
            )?;
        }
    }
    Ok(())
}

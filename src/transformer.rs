use crate::config::Config;
use crate::outcome::Outcome;
use crate::{reader, report, writer};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Runs the read, uppercase, write sequence for one pair of files.
///
/// Every run produces exactly one [`Outcome`]; read and write failures are
/// folded into it instead of propagating as errors. The outcome is printed to
/// the console and also returned so callers can branch on it.
///
/// # Example
///
/// ```no_run
/// use upcase::{Config, FileTransformer};
///
/// let config = Config::new("notes.txt", "notes_upper.txt");
/// let outcome = FileTransformer::new(config).run();
/// assert!(outcome.is_success());
/// ```
pub struct FileTransformer {
    config: Config,
}

impl FileTransformer {
    /// Creates a transformer for the paths in `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the transform and reports the result on the console.
    ///
    /// The input file is read at most once and the output file written at
    /// most once. The completion line is printed after the report on every
    /// exit path, panics included.
    pub fn run(&self) -> Outcome {
        self.run_with_output(&mut std::io::stdout())
    }

    /// [`run`](Self::run) with the report and completion line going to `out`.
    ///
    /// Tests drive this with a `Vec<u8>` to capture the console text.
    #[instrument(skip(self, out), fields(
        input = %self.config.input_path.display(),
        output = %self.config.output_path.display()
    ))]
    fn run_with_output<W: Write>(&self, out: &mut W) -> Outcome {
        // Declared first so it drops last, after the outcome report.
        let mut completion = CompletionGuard { out };

        let start = Instant::now();
        info!("Starting transform");

        let outcome = self.transform();
        report::print_outcome(&mut *completion.out, &outcome);

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            success = outcome.is_success(),
            "Transform finished"
        );
        outcome
    }

    /// Performs the three steps and folds any failure into the outcome.
    fn transform(&self) -> Outcome {
        let input = match reader::read_document(&self.config.input_path) {
            Ok(document) => document,
            Err(e) => {
                warn!("Read failed: {e}");
                return Outcome::from(e);
            }
        };
        info!(
            "✓ Read {} bytes ({} lines) from '{}'",
            input.size_bytes(),
            input.line_count(),
            input.path.display()
        );

        let output = input.to_uppercase(&self.config.output_path);

        if let Err(e) = writer::write_document(&output) {
            warn!("Write failed: {e}");
            return Outcome::from(e);
        }
        info!(
            "✓ Wrote {} bytes to '{}'",
            output.size_bytes(),
            output.path.display()
        );

        Outcome::Success {
            original: input.content,
            modified: output.content,
        }
    }
}

/// Writes the completion line when dropped.
///
/// Held across the whole of [`FileTransformer::run`], so the line appears
/// exactly once per run regardless of how the run ends. A failed console
/// write is ignored, as in the report.
struct CompletionGuard<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Drop for CompletionGuard<'_, W> {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "\nProgram finished.");
    }
}

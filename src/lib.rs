//! # upcase
//!
//! A small interactive tool that reads a text file, converts its contents to
//! uppercase, and writes the result to a new file.
//!
//! ## Features
//!
//! - Interactive filename prompts on the terminal
//! - Unicode-aware uppercasing via the standard library mapping
//! - Failures reported as values, never as panics
//! - A completion line printed on every exit path
//!
//! ## Quick Start
//!
//! ```no_run
//! use upcase::{Config, FileTransformer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .input_path("notes.txt")
//!     .output_path("notes_upper.txt")
//!     .build()?;
//!
//! let outcome = FileTransformer::new(config).run();
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate follows a short pipeline:
//! 1. **Prompt**: Asks for the input and output filenames
//! 2. **Reader**: Loads the input file in a single read
//! 3. **Transformer**: Uppercases the content
//! 4. **Writer**: Persists the result in a single write

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod document;
mod error;
mod outcome;
mod prompt;
mod reader;
mod report;
mod transformer;
mod writer;

pub use config::{Config, ConfigBuilder};
pub use document::{InputDocument, OutputDocument};
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use prompt::prompt_for_paths;
pub use transformer::FileTransformer;

/// Reads `input_path`, uppercases it, and writes it to `output_path`.
///
/// This is the main entry point for the library. The outcome is printed to
/// the console and returned; read and write failures are carried inside it
/// rather than surfaced as errors.
///
/// # Examples
///
/// ```no_run
/// use upcase::transform;
///
/// let outcome = transform("notes.txt", "notes_upper.txt");
/// assert!(outcome.is_success());
/// ```
pub fn transform(
    input_path: impl Into<std::path::PathBuf>,
    output_path: impl Into<std::path::PathBuf>,
) -> Outcome {
    FileTransformer::new(Config::new(input_path, output_path)).run()
}

//! Basic usage: transform a file with paths fixed in code.
//!
//! Run with: `cargo run --example basic`

use upcase::{Config, FileTransformer, Outcome};

fn main() {
    let config = Config::new("demos/basic.rs", "out_basic.txt");

    match FileTransformer::new(config).run() {
        Outcome::Success { modified, .. } => {
            println!("✓ Wrote {} uppercase bytes to out_basic.txt", modified.len());
        }
        Outcome::NotFound { path } => {
            println!("✗ Input '{}' does not exist", path.display());
        }
        Outcome::IoFailure { message } => {
            println!("✗ Transform failed: {message}");
        }
    }
}

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use upcase::{Config, FileTransformer};

#[derive(Parser, Debug)]
#[command(
    name = "upcase",
    version,
    about = "Uppercase a text file into a new file",
    long_about = "Reads a text file, converts its contents to uppercase, and saves the result \
    to a new file.\n\n\
    The input and output filenames are asked for interactively on the terminal; there are no \
    flags for them. The result of the run is reported as console text and the exit code stays \
    zero whether or not the transform succeeded.\n\n\
    USAGE EXAMPLES:\n  \
      # Run and answer the two prompts\n  \
      upcase\n\n  \
      # Run with debug logging\n  \
      upcase -v"
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    print_welcome();

    let (input_path, output_path) =
        upcase::prompt_for_paths().context("Failed to read the filenames")?;

    let config = Config::builder()
        .input_path(input_path)
        .output_path(output_path)
        .build()
        .context("Failed to build configuration")?;

    // The outcome is reported on the console; the exit code stays zero
    // whether or not the transform succeeded.
    FileTransformer::new(config).run();

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("upcase=info"),
        1 => EnvFilter::new("upcase=debug"),
        _ => EnvFilter::new("upcase=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}

fn print_welcome() {
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║                   File Transformer                    ║");
    println!("║ Reads a text file, converts its contents to uppercase ║");
    println!("║ and saves the result to a new file.                   ║");
    println!("╚═══════════════════════════════════════════════════════╝");
}

//! append_manifests
//!
//! Stores the lines of a text file, line endings included, as a list of
//! strings under a top-level key of a YAML manifest, and rewrites the
//! manifest in place.

use clap::Parser;
use clap::error::ErrorKind;

mod append;
mod cli;
mod content;
mod error;
mod logging;
mod manifest;

use cli::Cli;

/// Exit status for usage errors and failed runs
const EXIT_FAILURE: i32 = 1;

/// Parse the command line; usage errors print to stdout and exit 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print!("{}", e.render());
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbosity());

    if let Err(e) = append::run(&cli.append_args()) {
        tracing::debug!(error = ?e, "append failed");
        eprintln!("Error: {}", e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("  help: {}", help);
        }
        std::process::exit(EXIT_FAILURE);
    }
}

//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::append::AppendArgs;
use crate::logging::Verbosity;

/// append_manifests - store the lines of a text file under a key of a YAML manifest
#[derive(Parser, Debug)]
#[command(
    name = "append_manifests",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Store the lines of a text file under a top-level key of a YAML manifest",
    long_about = "Reads YAML_FILE and CONTENT_FILE, sets KEY in the manifest to the list of \
                  lines of CONTENT_FILE (line endings included), replacing any previous value, \
                  and writes YAML_FILE back in place.",
    after_help = "Examples:\n    \
                  append_manifests manifest.yaml notes.txt notes\n    \
                  append_manifests --dry-run ci.yaml script.sh script\n    \
                  append_manifests manifest.yaml notes.txt -- --key"
)]
pub struct Cli {
    /// YAML manifest to update in place
    #[arg(value_name = "YAML_FILE")]
    pub yaml_file: PathBuf,

    /// Text file whose lines become the value of KEY
    #[arg(value_name = "CONTENT_FILE")]
    pub content_file: PathBuf,

    /// Top-level key to set (any previous value is replaced)
    #[arg(
        value_name = "KEY",
        value_parser = NonEmptyStringValueParser::new(),
        allow_hyphen_values = true
    )]
    pub key: String,

    /// Print the updated manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Typed arguments for the append pipeline
    pub fn append_args(&self) -> AppendArgs {
        AppendArgs {
            yaml_path: self.yaml_file.clone(),
            content_path: self.content_file.clone(),
            key: self.key.clone(),
            dry_run: self.dry_run,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

//! The append pipeline: load manifest, read content lines, set key, save.

use std::io::Write;
use std::path::PathBuf;

use crate::content;
use crate::error::{Result, file_write_failed};
use crate::manifest::Manifest;

/// Arguments for a single append run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendArgs {
    /// Manifest to update in place
    pub yaml_path: PathBuf,
    /// File whose lines are stored under `key`
    pub content_path: PathBuf,
    /// Top-level manifest key
    pub key: String,
    /// Print the result instead of writing it
    pub dry_run: bool,
}

/// Run the append pipeline
///
/// Nothing is written until both inputs have been read and parsed, so any
/// input error leaves the manifest untouched.
pub fn run(args: &AppendArgs) -> Result<()> {
    let manifest = apply(args)?;

    if args.dry_run {
        let yaml = manifest.to_yaml()?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(yaml.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| file_write_failed("<stdout>", e.to_string()))?;
        return Ok(());
    }

    manifest.save()?;
    tracing::info!(
        manifest = %manifest.path().display(),
        key = %args.key,
        "manifest updated"
    );
    Ok(())
}

/// Load both inputs and return the updated manifest without writing it
pub fn apply(args: &AppendArgs) -> Result<Manifest> {
    let mut manifest = Manifest::load(&args.yaml_path)?;
    let lines = content::read_lines(&args.content_path)?;
    let line_count = lines.len();

    let previous = manifest.set_lines(&args.key, lines);
    tracing::debug!(
        key = %args.key,
        lines = line_count,
        replaced = previous.is_some(),
        "set manifest key"
    );

    Ok(manifest)
}

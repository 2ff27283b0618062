//! Atomic manifest writes
//!
//! The new content goes to a temporary file next to the target, which is
//! then renamed over it. Readers never observe a half-written manifest, and
//! a failure at any step leaves the original file as it was.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, file_write_failed};

/// Prefix of the temporary file created beside the target
pub const TEMP_PREFIX: &str = ".append_manifests.";

/// Replace the contents of `path` with `content` atomically.
///
/// Symlinks are followed so the link itself is preserved, and the target's
/// permissions carry over to the replacement file. An existing target that
/// cannot be opened for writing is an error even when its directory is
/// writable.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_target(path);
    ensure_writable(&target)?;
    let dir = parent_dir(&target);

    let mut tmp = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| file_write_failed(dir.display().to_string(), e.to_string()))?;

    write_contents(&mut tmp, &target, content)?;

    tmp.persist(&target)
        .map_err(|e| file_write_failed(target.display().to_string(), e.error.to_string()))?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "wrote manifest");
    Ok(())
}

fn ensure_writable(target: &Path) -> Result<()> {
    match OpenOptions::new().write(true).open(target) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(file_write_failed(target.display().to_string(), e.to_string())),
    }
}

fn write_contents(tmp: &mut NamedTempFile, target: &Path, content: &str) -> Result<()> {
    let fail = |e: io::Error| file_write_failed(tmp_display(target), e.to_string());

    tmp.write_all(content.as_bytes()).map_err(fail)?;
    tmp.flush().map_err(fail)?;

    if let Ok(metadata) = fs::metadata(target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(fail)?;
    }

    tmp.as_file().sync_all().map_err(fail)
}

fn tmp_display(target: &Path) -> String {
    format!("{} (temporary copy)", target.display())
}

fn resolve_target(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

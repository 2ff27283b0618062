//! Content file reading
//!
//! The content file is read as UTF-8 text and split the same way a
//! line-oriented text reader hands it back: `"\n"`, `"\r\n"` and a lone
//! `"\r"` all end a line and are normalised to `"\n"`, every element keeps
//! its terminator, and only the final element may be missing one.

use std::fs;
use std::path::Path;

use crate::error::{Result, fs::from_read_error};

/// Read `path` and split it into lines, terminators included.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| from_read_error(path, &e))?;
    let lines = split_lines(&text);

    tracing::debug!(path = %path.display(), lines = lines.len(), "read content file");
    Ok(lines)
}

/// Split `text` into lines with universal newlines.
///
/// An empty input yields no lines, and a trailing terminator does not
/// produce an empty final element.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

//! File system errors

use std::io;
use std::path::Path;

use super::AppendError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> AppendError {
    AppendError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppendError {
    AppendError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AppendError {
    AppendError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an I/O error raised while reading `path`.
///
/// A missing file becomes [`AppendError::FileNotFound`]; anything else
/// (permissions, invalid UTF-8, a directory) is a read failure.
pub fn from_read_error(path: &Path, err: &io::Error) -> AppendError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}

//! Error types and handling for append_manifests
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`fs`]: File system errors
//! - [`manifest`]: Manifest parsing and serialization errors

pub mod fs;
pub mod manifest;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use fs::{
    not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use manifest::{not_mapping as manifest_not_mapping, parse_failed as manifest_parse_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for append_manifests operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppendError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(append_manifests::fs::not_found),
        help("Check that the path is correct and the file exists")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(append_manifests::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(append_manifests::fs::write_failed),
        help("Check directory permissions and available disk space")
    )]
    FileWriteFailed { path: String, reason: String },

    // Manifest errors
    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(append_manifests::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Manifest root is not a mapping: {path} (found {found})")]
    #[diagnostic(
        code(append_manifests::manifest::not_mapping),
        help("The top level of the manifest must be a key/value mapping")
    )]
    ManifestNotMapping { path: String, found: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppendError>;

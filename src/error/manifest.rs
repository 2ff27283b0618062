//! Manifest errors

use super::AppendError;

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppendError {
    AppendError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest not mapping error
pub fn not_mapping(path: impl Into<String>, found: impl Into<String>) -> AppendError {
    AppendError::ManifestNotMapping {
        path: path.into(),
        found: found.into(),
    }
}

//! Project mutation errors
//!
//! These are recorded per dependency entry and never abort an installation.

use std::path::Path;

use super::SolmodError;

/// Creates a target write failed error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> SolmodError {
    SolmodError::TargetWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

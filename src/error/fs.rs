//! File system errors

use super::SolmodError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SolmodError {
    SolmodError::IoError {
        message: message.into(),
    }
}

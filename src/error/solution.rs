//! Solution errors

use std::path::Path;

use super::SolmodError;

/// Creates a solution not found error
pub fn not_found(path: &Path) -> SolmodError {
    SolmodError::SolutionNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an error for a directory without any solution file
pub fn none_found(dir: &Path) -> SolmodError {
    SolmodError::NoSolutionFound {
        dir: dir.display().to_string(),
    }
}

/// Creates an error for a directory holding more than one solution file
pub fn ambiguous(dir: &Path, candidates: &[String]) -> SolmodError {
    SolmodError::MultipleSolutionsFound {
        dir: dir.display().to_string(),
        candidates: candidates.join(", "),
    }
}

/// Creates a solution read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> SolmodError {
    SolmodError::SolutionReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

//! Basic file operations for project mutation
//!
//! This module handles low-level file operations:
//! - Reading a target file (read_target)
//! - Replacing a target file atomically (write_atomic)

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, project};

/// Read a target file as UTF-8 text
pub fn read_target(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| project::write_failed(path, e.to_string()))
}

/// Replace `path` with `content`.
///
/// The content is written to a temp file in the same directory and renamed over
/// the target, so readers never observe a half-written project file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| project::write_failed(path, e.to_string()))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| project::write_failed(path, e.to_string()))?;
    // Temp files are created owner-only; keep the target's mode
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| project::write_failed(path, e.to_string()))?;
    }
    temp.persist(path)
        .map_err(|e| project::write_failed(path, e.error.to_string()))?;

    Ok(())
}

//! Solution file discovery
//!
//! When no solution is given explicitly, the working directory must hold exactly
//! one `*.sln` file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, solution};

const SOLUTION_EXTENSION: &str = "sln";

/// Resolve the solution to operate on.
///
/// `explicit` may point at a solution file or at a directory to search; `None`
/// searches `current_dir`.
pub fn resolve(explicit: Option<&Path>, current_dir: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_dir() => find_in(path),
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(solution::not_found(path)),
        None => find_in(current_dir),
    }
}

/// Find the single solution file directly inside `dir`
pub fn find_in(dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|e| solution::read_failed(dir, e.to_string()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_solution_file(path))
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(solution::none_found(dir)),
        1 => Ok(candidates.remove(0)),
        _ => {
            let names: Vec<String> = candidates
                .iter()
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect();
            Err(solution::ambiguous(dir, &names))
        }
    }
}

fn is_solution_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOLUTION_EXTENSION))
}

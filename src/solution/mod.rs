//! Project location within a solution
//!
//! This module handles:
//! - Reading the project list of a `.sln` file
//! - Picking the project that receives a native package, by naming convention
//! - Picking the web-host projects that receive web packages

pub mod discovery;
pub mod parser;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{ProjectFile, TargetClassification};
use crate::error::{Result, solution};
use crate::installer::web::MANIFEST_FILE;

/// Name suffixes of projects hosting a web front end
pub const WEB_HOST_SUFFIXES: &[&str] = &[".Web", ".Web.Host"];

/// Locates the projects of a solution that should receive dependencies
pub trait ProjectLocator {
    /// Every project listed in the solution that exists on disk, in declaration order
    fn list_projects(&self, solution_path: &Path) -> Result<Vec<ProjectFile>>;

    /// The project receiving native packages of the given classification, if any
    fn find_target_for_native<'p>(
        &self,
        projects: &'p [ProjectFile],
        target: TargetClassification,
    ) -> Option<&'p ProjectFile>;

    /// Every web-host project able to carry a package manifest
    fn find_web_targets<'p>(&self, projects: &'p [ProjectFile]) -> Vec<&'p ProjectFile>;
}

/// Project locator for Visual Studio solution files
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionLocator;

impl ProjectLocator for SolutionLocator {
    fn list_projects(&self, solution_path: &Path) -> Result<Vec<ProjectFile>> {
        let content = fs::read_to_string(solution_path)
            .map_err(|e| solution::read_failed(solution_path, e.to_string()))?;
        let solution_dir = solution_path.parent().unwrap_or_else(|| Path::new("."));

        let mut seen = HashSet::new();
        let mut projects = Vec::new();

        for relative in parser::project_paths(&content) {
            let path = join_solution_relative(solution_dir, &relative);
            if !path.is_file() {
                debug!(project = %relative, "Skipping project missing on disk");
                continue;
            }

            let path = dunce::canonicalize(&path).unwrap_or(path);
            if seen.insert(path.clone()) {
                projects.push(ProjectFile::new(path));
            }
        }

        debug!(
            solution = %solution_path.display(),
            count = projects.len(),
            "Listed solution projects"
        );
        Ok(projects)
    }

    fn find_target_for_native<'p>(
        &self,
        projects: &'p [ProjectFile],
        target: TargetClassification,
    ) -> Option<&'p ProjectFile> {
        let suffix = target.project_suffix()?;
        let mut matching = projects.iter().filter(|p| p.has_name_suffix(suffix));
        let first = matching.next()?;

        let ignored: Vec<&str> = matching.map(|p| p.name.as_str()).collect();
        if !ignored.is_empty() {
            debug!(
                %target,
                chosen = %first.name,
                ignored = ?ignored,
                "Several projects match classification, using the first declared"
            );
        }

        Some(first)
    }

    fn find_web_targets<'p>(&self, projects: &'p [ProjectFile]) -> Vec<&'p ProjectFile> {
        projects
            .iter()
            .filter(|p| WEB_HOST_SUFFIXES.iter().any(|s| p.has_name_suffix(s)))
            .filter(|p| p.directory().join(MANIFEST_FILE).is_file())
            .collect()
    }
}

/// Join a solution-relative path, accepting `\` separators on every platform
fn join_solution_relative(solution_dir: &Path, relative: &str) -> PathBuf {
    relative
        .split(['\\', '/'])
        .filter(|part| !part.is_empty() && *part != ".")
        .fold(solution_dir.to_path_buf(), |acc, part| acc.join(part))
}

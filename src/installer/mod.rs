//! Dependency installers
//!
//! This module handles:
//! - Adding native packages to project files ([`native`])
//! - Adding web packages to `package.json` manifests ([`web`])
//! - Atomic file replacement shared by both ([`file_ops`])
//!
//! Every installer is idempotent: applying a dependency that is already declared
//! leaves the file untouched and reports [`ApplyOutcome::AlreadyPresent`].

use std::path::Path;

use crate::domain::{NativePackageDependency, ProjectFile, WebPackageDependency};
use crate::error::Result;

pub mod file_ops;
pub mod native;
pub mod web;

pub use native::PackageReferenceInstaller;
pub use web::PackageJsonInstaller;

/// What applying a dependency did to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The dependency was written to the target
    Added,
    /// The target already declared the dependency; nothing was written
    AlreadyPresent,
}

/// Applies native package dependencies to project files
pub trait NativePackageInstaller {
    fn apply_native(
        &self,
        target: &ProjectFile,
        dependency: &NativePackageDependency,
    ) -> Result<ApplyOutcome>;
}

/// Applies web package dependencies to the manifest inside a project directory
pub trait WebPackageInstaller {
    fn apply_web(&self, project_dir: &Path, dependency: &WebPackageDependency)
    -> Result<ApplyOutcome>;
}

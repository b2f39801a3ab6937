//! Add-module operation
//!
//! Resolves a module from the registry and applies each of its dependencies to the
//! matching projects of a solution. Only module resolution is fatal; a dependency
//! without a target or with a failed write is recorded and processing continues.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Module, ProjectFile};
use crate::error::Result;
use crate::installer::{NativePackageInstaller, WebPackageInstaller};
use crate::resolver::ModuleResolver;
use crate::solution::ProjectLocator;

pub mod display;
pub mod report;


pub use report::{AppliedEntry, InstallReport, Notice, PackageKind};

/// Coordinates resolver, locator and installers for one add-module run
pub struct AddModuleOperation<'a, R, L, N, W> {
    resolver: &'a R,
    locator: &'a L,
    native_installer: &'a N,
    web_installer: &'a W,
}

impl<'a, R, L, N, W> AddModuleOperation<'a, R, L, N, W>
where
    R: ModuleResolver,
    L: ProjectLocator,
    N: NativePackageInstaller,
    W: WebPackageInstaller,
{
    pub fn new(
        resolver: &'a R,
        locator: &'a L,
        native_installer: &'a N,
        web_installer: &'a W,
    ) -> Self {
        Self {
            resolver,
            locator,
            native_installer,
            web_installer,
        }
    }

    /// Install `module_name` into the solution at `solution_path`
    pub fn execute(&self, solution_path: &Path, module_name: &str) -> Result<InstallReport> {
        // Nothing is touched before the manifest is fully resolved
        let module = self.resolver.resolve(module_name)?;

        info!(
            "Installing module '{}' to the solution '{}'",
            module.name,
            solution_name(solution_path)
        );

        let projects = self.locator.list_projects(solution_path)?;
        let mut report = InstallReport::new(module.name.clone());

        self.install_native_packages(&module, &projects, &mut report);
        self.install_web_packages(&module, &projects, &mut report);

        Ok(report)
    }

    fn install_native_packages(
        &self,
        module: &Module,
        projects: &[ProjectFile],
        report: &mut InstallReport,
    ) {
        for dependency in &module.native_packages {
            let Some(target) = self
                .locator
                .find_target_for_native(projects, dependency.target)
            else {
                let notice = Notice::NativeTargetUnavailable {
                    package: dependency.name.clone(),
                    target: dependency.target,
                };
                debug!("{notice}");
                report.notices.push(notice);
                continue;
            };

            match self.native_installer.apply_native(target, dependency) {
                Ok(outcome) => report.applied.push(AppliedEntry {
                    kind: PackageKind::Native,
                    package: dependency.name.clone(),
                    target: target.path.clone(),
                    outcome,
                }),
                Err(e) => {
                    let notice = Notice::WriteFailed {
                        kind: PackageKind::Native,
                        package: dependency.name.clone(),
                        target: target.path.clone(),
                        reason: e.to_string(),
                    };
                    debug!("{notice}");
                    report.notices.push(notice);
                }
            }
        }
    }

    fn install_web_packages(
        &self,
        module: &Module,
        projects: &[ProjectFile],
        report: &mut InstallReport,
    ) {
        if module.web_packages.is_empty() {
            return;
        }

        let targets = self.locator.find_web_targets(projects);
        if targets.is_empty() {
            debug!("{}", Notice::WebTargetsUnavailable);
            report.notices.push(Notice::WebTargetsUnavailable);
            return;
        }

        for target in targets {
            let project_dir = target.directory();
            for dependency in module.web_host_packages() {
                match self.web_installer.apply_web(project_dir, dependency) {
                    Ok(outcome) => report.applied.push(AppliedEntry {
                        kind: PackageKind::Web,
                        package: dependency.name.clone(),
                        target: project_dir.to_path_buf(),
                        outcome,
                    }),
                    Err(e) => {
                        let notice = Notice::WriteFailed {
                            kind: PackageKind::Web,
                            package: dependency.name.clone(),
                            target: project_dir.to_path_buf(),
                            reason: e.to_string(),
                        };
                        debug!("{notice}");
                        report.notices.push(notice);
                    }
                }
            }
        }
    }
}

/// Solution file name without its extension
fn solution_name(solution_path: &Path) -> String {
    solution_path
        .file_stem()
        .map_or_else(|| solution_path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

//! Add-module command implementation
//!
//! The process:
//! 1. Load settings (flag, environment, config file)
//! 2. Locate the solution
//! 3. Resolve the module and apply its packages
//! 4. Print the summary

use console::Term;
use tracing::debug;

use crate::cli::AddModuleArgs;
use crate::config::Settings;
use crate::error::{Result, fs};
use crate::installer::{PackageJsonInstaller, PackageReferenceInstaller};
use crate::operations::add_module::{AddModuleOperation, display};
use crate::progress::SpinnerResolver;
use crate::resolver::RegistryResolver;
use crate::solution::{SolutionLocator, discovery};

/// Run the add-module command
pub fn run(args: AddModuleArgs, quiet: bool) -> Result<()> {
    let settings = Settings::load(args.registry_url.as_deref())?;

    let current_dir = std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?;
    let solution_path = discovery::resolve(args.solution.as_deref(), &current_dir)?;

    let registry = RegistryResolver::new(&settings);
    debug!(
        registry = registry.registry_url(),
        solution = %solution_path.display(),
        "Using registry"
    );

    let show_spinner = !quiet && Term::stderr().is_term();
    let resolver = SpinnerResolver::new(registry, show_spinner);
    let native_installer = PackageReferenceInstaller::new(args.restore);

    let report = AddModuleOperation::new(
        &resolver,
        &SolutionLocator,
        &native_installer,
        &PackageJsonInstaller,
    )
    .execute(&solution_path, &args.module)?;

    if !quiet {
        display::print_install_summary(&report, &solution_path);
    }

    Ok(())
}

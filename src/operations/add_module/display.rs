//! Display functions for the add-module operation

use std::path::Path;

use console::Style;

use super::report::InstallReport;
use crate::installer::ApplyOutcome;

/// Print the outcome of an add-module run.
///
/// Skipped and failed entries only show up as counts here; their details are
/// logged at debug level.
pub fn print_install_summary(report: &InstallReport, solution_path: &Path) {
    for line in summary_lines(report, solution_path) {
        println!("{line}");
    }
}

fn summary_lines(report: &InstallReport, solution_path: &Path) -> Vec<String> {
    let solution = solution_path
        .file_name()
        .map_or_else(|| solution_path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let mut lines = Vec::with_capacity(report.applied.len() + 2);
    lines.push(format!(
        "{} module {} into {}",
        Style::new().bold().green().apply_to("Installed"),
        Style::new().bold().yellow().apply_to(&report.module),
        solution
    ));

    for entry in &report.applied {
        let status = match entry.outcome {
            ApplyOutcome::Added => Style::new().green().apply_to("added"),
            ApplyOutcome::AlreadyPresent => Style::new().dim().apply_to("already present"),
        };
        lines.push(format!(
            "  - {} ({}) -> {} [{}]",
            entry.package,
            entry.kind,
            display_target(&entry.target, solution_path),
            status
        ));
    }

    lines.push(format!(
        "{} added, {} already present, {} skipped, {} failed",
        report.added_count(),
        report.already_present_count(),
        report.skipped_count(),
        report.failed_count()
    ));
    lines
}

/// Show targets relative to the solution directory when possible
fn display_target(target: &Path, solution_path: &Path) -> String {
    let solution_dir = solution_path
        .parent()
        .and_then(|dir| dunce::canonicalize(dir).ok());

    solution_dir
        .as_deref()
        .and_then(|dir| target.strip_prefix(dir).ok())
        .unwrap_or(target)
        .display()
        .to_string()
}

//! Per-entry results of an add-module run

use std::fmt;
use std::path::PathBuf;

use crate::domain::TargetClassification;
use crate::installer::ApplyOutcome;

/// Which installer handled an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Native,
    Web,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Native => f.write_str("native"),
            PackageKind::Web => f.write_str("web"),
        }
    }
}

/// A dependency that reached its installer without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEntry {
    pub kind: PackageKind,
    pub package: String,
    /// Project file (native) or project directory (web)
    pub target: PathBuf,
    pub outcome: ApplyOutcome,
}

/// A skipped or failed entry; never fatal to the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NativeTargetUnavailable {
        package: String,
        target: TargetClassification,
    },
    WebTargetsUnavailable,
    WriteFailed {
        kind: PackageKind,
        package: String,
        target: PathBuf,
        reason: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NativeTargetUnavailable { package, target } => write!(
                f,
                "Target project is not available for native package '{package}' ({target})"
            ),
            Notice::WebTargetsUnavailable => {
                f.write_str("Target project is not available for web packages")
            }
            Notice::WriteFailed {
                kind,
                package,
                target,
                reason,
            } => write!(
                f,
                "Could not add {kind} package '{package}' to {}: {reason}",
                target.display()
            ),
        }
    }
}

/// Everything an add-module run did, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub module: String,
    pub applied: Vec<AppliedEntry>,
    pub notices: Vec<Notice>,
}

impl InstallReport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    pub fn added_count(&self) -> usize {
        self.count(ApplyOutcome::Added)
    }

    pub fn already_present_count(&self) -> usize {
        self.count(ApplyOutcome::AlreadyPresent)
    }

    pub fn failed_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| matches!(n, Notice::WriteFailed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.notices.len() - self.failed_count()
    }

    fn count(&self, outcome: ApplyOutcome) -> usize {
        self.applied.iter().filter(|e| e.outcome == outcome).count()
    }
}

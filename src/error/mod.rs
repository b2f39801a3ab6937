//! Error types and handling for solmod
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: Module registry lookup errors
//! - [`solution`]: Solution discovery and parsing errors
//! - [`project`]: Per-entry project mutation errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod project;
pub mod registry;
pub mod solution;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for solmod operations
#[derive(Error, Diagnostic, Debug)]
pub enum SolmodError {
    // Registry errors
    #[error("'{name}' module could not be found")]
    #[diagnostic(
        code(solmod::registry::module_not_found),
        help("Check the module name. Names must match the registry exactly, e.g. Acme.Blogging")
    )]
    ModuleNotFound { name: String },

    #[error("Invalid module name: '{name}'")]
    #[diagnostic(
        code(solmod::registry::invalid_module_name),
        help("Pass the module name as it is published in the registry")
    )]
    InvalidModuleName { name: String },

    #[error("Remote server returned '{status}'")]
    #[diagnostic(code(solmod::registry::remote_service_failed))]
    RemoteServiceFailed { status: String },

    #[error("Failed to reach module registry at {url}: {reason}")]
    #[diagnostic(
        code(solmod::registry::unreachable),
        help("Check the registry URL (--registry-url or SOLMOD_REGISTRY_URL) and your network")
    )]
    RegistryUnreachable { url: String, reason: String },

    #[error("Unexpected registry response: {reason}")]
    #[diagnostic(
        code(solmod::registry::protocol_violation),
        help("The registry may be running an incompatible version")
    )]
    ProtocolViolation { reason: String },

    // Solution errors
    #[error("Solution file not found: {path}")]
    #[diagnostic(code(solmod::solution::not_found))]
    SolutionNotFound { path: String },

    #[error("No solution file found in {dir}")]
    #[diagnostic(
        code(solmod::solution::none_found),
        help("Run solmod from the solution directory or pass --solution <PATH>")
    )]
    NoSolutionFound { dir: String },

    #[error("Multiple solution files found in {dir}: {candidates}")]
    #[diagnostic(
        code(solmod::solution::ambiguous),
        help("Pick one with --solution <PATH>")
    )]
    MultipleSolutionsFound { dir: String, candidates: String },

    #[error("Failed to read solution file: {path}: {reason}")]
    #[diagnostic(code(solmod::solution::read_failed))]
    SolutionReadFailed { path: String, reason: String },

    // Project mutation errors
    #[error("Failed to update {path}: {reason}")]
    #[diagnostic(code(solmod::project::write_failed))]
    TargetWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(solmod::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(solmod::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(solmod::config::invalid))]
    ConfigInvalid { message: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(solmod::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(solmod::fs::io_error))]
    IoError { message: String },
}

impl SolmodError {
    /// Whether the error stems from user input rather than a system fault
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SolmodError::ModuleNotFound { .. }
                | SolmodError::InvalidModuleName { .. }
                | SolmodError::SolutionNotFound { .. }
                | SolmodError::NoSolutionFound { .. }
                | SolmodError::MultipleSolutionsFound { .. }
                | SolmodError::UnsupportedShell { .. }
        )
    }
}

impl From<serde_yaml::Error> for SolmodError {
    fn from(err: serde_yaml::Error) -> Self {
        SolmodError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SolmodError>;

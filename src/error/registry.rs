//! Module registry errors

use super::SolmodError;

/// Creates a module not found error
pub fn module_not_found(name: impl Into<String>) -> SolmodError {
    SolmodError::ModuleNotFound { name: name.into() }
}

/// Creates an invalid module name error
pub fn invalid_module_name(name: impl Into<String>) -> SolmodError {
    SolmodError::InvalidModuleName { name: name.into() }
}

/// Creates a remote service error from an HTTP status line
pub fn remote_service_failed(status: impl std::fmt::Display) -> SolmodError {
    SolmodError::RemoteServiceFailed {
        status: status.to_string(),
    }
}

/// Creates a registry unreachable error
pub fn unreachable(url: impl Into<String>, reason: impl Into<String>) -> SolmodError {
    SolmodError::RegistryUnreachable {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a protocol violation error
pub fn protocol_violation(reason: impl Into<String>) -> SolmodError {
    SolmodError::ProtocolViolation {
        reason: reason.into(),
    }
}

//! Module resolution against the remote registry
//!
//! This module handles:
//! - Looking up a module manifest by name (single HTTP GET, no retry)
//! - Mapping registry responses onto usage, remote and protocol errors

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::Settings;
use crate::domain::Module;
use crate::error::{Result, registry};

/// Source of module manifests
pub trait ModuleResolver {
    /// Fetch the manifest of the module called `module_name`
    fn resolve(&self, module_name: &str) -> Result<Module>;
}

/// Resolves modules over HTTP
#[derive(Debug, Clone)]
pub struct RegistryResolver {
    registry_url: String,
    timeout: Duration,
}

impl RegistryResolver {
    pub fn new(settings: &Settings) -> Self {
        Self {
            registry_url: settings.registry_url.clone(),
            timeout: settings.timeout,
        }
    }

    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("solmod/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| registry::unreachable(&self.registry_url, e.to_string()))
    }
}

impl ModuleResolver for RegistryResolver {
    fn resolve(&self, module_name: &str) -> Result<Module> {
        let module_name = Module::validate_name(module_name)?;

        // The client is scoped to this lookup and dropped on every return path
        let client = self.client()?;

        debug!(registry = %self.registry_url, module = module_name, "Looking up module");

        let response = client
            .get(&self.registry_url)
            .query(&[("name", module_name)])
            .send()
            .map_err(|e| registry::unreachable(&self.registry_url, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| registry::unreachable(&self.registry_url, e.to_string()))?;

        debug!(%status, bytes = body.len(), "Registry responded");

        interpret_response(module_name, status, &body)
    }
}

/// Turn a registry response into a module manifest or a categorized error
pub fn interpret_response(module_name: &str, status: StatusCode, body: &str) -> Result<Module> {
    if status == StatusCode::NOT_FOUND {
        return Err(registry::module_not_found(module_name));
    }

    if !status.is_success() {
        return Err(registry::remote_service_failed(status));
    }

    serde_json::from_str(body).map_err(|e| registry::protocol_violation(e.to_string()))
}

//! Module manifest as published by the registry
//!
//! A module is a named bundle of native packages (project-file references) and web
//! packages (`package.json` dependencies). It is fetched once per installation and
//! never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ApplicationType, TargetClassification};
use crate::error::{Result, registry};

/// A module and its ordered dependency lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,

    #[serde(default, alias = "nugetPackages", deserialize_with = "null_as_empty")]
    pub native_packages: Vec<NativePackageDependency>,

    #[serde(default, alias = "npmPackages", deserialize_with = "null_as_empty")]
    pub web_packages: Vec<WebPackageDependency>,
}

/// A package referenced from a project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativePackageDependency {
    pub name: String,

    #[serde(default)]
    pub target: TargetClassification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A package declared in a web project's `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPackageDependency {
    pub name: String,

    #[serde(default)]
    pub application_type: ApplicationType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Module {
    /// Check a user-supplied module name before it is sent to the registry
    pub fn validate_name(name: &str) -> Result<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(registry::invalid_module_name(name));
        }
        Ok(trimmed)
    }

    /// Web packages that belong in a web-host project's manifest
    pub fn web_host_packages(&self) -> impl Iterator<Item = &WebPackageDependency> {
        self.web_packages
            .iter()
            .filter(|p| p.application_type.targets_web_host())
    }
}

impl NativePackageDependency {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, target: TargetClassification) -> Self {
        Self {
            name: name.into(),
            target,
            version: None,
        }
    }
}

impl WebPackageDependency {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, application_type: ApplicationType) -> Self {
        Self {
            name: name.into(),
            application_type,
            version: None,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

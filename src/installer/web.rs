//! Web package installation into `package.json`

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{ApplyOutcome, WebPackageInstaller, file_ops};
use crate::domain::WebPackageDependency;
use crate::error::{Result, project};

/// Manifest file of a web project
pub const MANIFEST_FILE: &str = "package.json";

/// Version range written when the registry does not pin one
pub const DEFAULT_VERSION: &str = "latest";

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// Sections already satisfying a dependency
const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// Writes dependencies into `package.json` manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonInstaller;

impl WebPackageInstaller for PackageJsonInstaller {
    fn apply_web(
        &self,
        project_dir: &Path,
        dependency: &WebPackageDependency,
    ) -> Result<ApplyOutcome> {
        let manifest_path = project_dir.join(MANIFEST_FILE);
        let content = file_ops::read_target(&manifest_path)?;

        // Visual Studio may save the manifest with a byte order mark
        let (bom, json) = match content.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => (BYTE_ORDER_MARK, rest),
            None => ("", content.as_str()),
        };

        let mut manifest: Value = serde_json::from_str(json)
            .map_err(|e| project::write_failed(&manifest_path, format!("malformed JSON: {e}")))?;

        let version = dependency.version.as_deref().unwrap_or(DEFAULT_VERSION);
        let added = add_dependency(&mut manifest, &dependency.name, version)
            .map_err(|reason| project::write_failed(&manifest_path, reason))?;

        if !added {
            debug!(package = %dependency.name, manifest = %manifest_path.display(), "Package already declared");
            return Ok(ApplyOutcome::AlreadyPresent);
        }

        let mut rendered = bom.to_string();
        rendered.push_str(
            &serde_json::to_string_pretty(&manifest)
                .map_err(|e| project::write_failed(&manifest_path, e.to_string()))?,
        );
        rendered.push('\n');
        file_ops::write_atomic(&manifest_path, &rendered)?;

        info!(package = %dependency.name, manifest = %manifest_path.display(), "Added web package");
        Ok(ApplyOutcome::Added)
    }
}

/// Add `name: version` to the manifest's `dependencies`.
///
/// Returns `Ok(false)` when any dependency section already declares the package.
pub fn add_dependency(manifest: &mut Value, name: &str, version: &str) -> std::result::Result<bool, String> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "manifest root is not a JSON object".to_string())?;

    let declared = DEPENDENCY_SECTIONS.iter().any(|section| {
        root.get(*section)
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(name))
    });
    if declared {
        return Ok(false);
    }

    let dependencies = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| "\"dependencies\" is not a JSON object".to_string())?;

    dependencies.insert(name.to_string(), Value::String(version.to_string()));
    Ok(true)
}

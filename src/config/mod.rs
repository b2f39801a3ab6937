//! Runtime settings for solmod
//!
//! Settings are layered, highest precedence first:
//! 1. Command line flags (`--registry-url`)
//! 2. Environment (`SOLMOD_REGISTRY_URL`, `SOLMOD_TIMEOUT_SECS`)
//! 3. `config.yaml` at `$SOLMOD_CONFIG` or `<config dir>/solmod/config.yaml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Module lookup endpoint; the module name is appended as the `name` query parameter
pub const DEFAULT_REGISTRY_URL: &str = "https://localhost:44328/api/app/module/byName/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const REGISTRY_URL_ENV: &str = "SOLMOD_REGISTRY_URL";
pub const TIMEOUT_ENV: &str = "SOLMOD_TIMEOUT_SECS";
pub const CONFIG_PATH_ENV: &str = "SOLMOD_CONFIG";

const CONFIG_DIR: &str = "solmod";
const CONFIG_FILE: &str = "config.yaml";

/// Contents of `config.yaml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SettingsFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Self = serde_yaml::from_str(yaml)?;
        Ok(file)
    }

    /// Read the settings file at `path`. A missing file yields empty settings.
    pub fn read(path: &Path) -> Result<Self> {
        let yaml = match std::fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(config::read_failed(path.display().to_string(), e.to_string())),
        };

        Self::from_yaml(&yaml)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub registry_url: String,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from the config file and process environment
    pub fn load(registry_url_flag: Option<&str>) -> Result<Self> {
        let file = match config_file_path() {
            Some(path) => SettingsFile::read(&path)?,
            None => SettingsFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok(), registry_url_flag)
    }

    /// Merge the layers. `env` looks up an environment variable by name.
    pub fn resolve(
        file: SettingsFile,
        env: impl Fn(&str) -> Option<String>,
        registry_url_flag: Option<&str>,
    ) -> Result<Self> {
        let registry_url = registry_url_flag
            .map(str::to_string)
            .or_else(|| env(REGISTRY_URL_ENV))
            .or(file.registry_url)
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let timeout_secs = match env(TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                config::invalid(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
            })?,
            None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let settings = Self {
            registry_url,
            timeout: Duration::from_secs(timeout_secs),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.registry_url).map_err(|e| {
            config::invalid(format!("registry URL '{}' is invalid: {e}", self.registry_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(config::invalid(format!(
                "registry URL '{}' must use http or https",
                self.registry_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(config::invalid("timeout must be at least one second"));
        }
        Ok(())
    }
}

/// Location of the settings file, if one can be determined
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::SolmodError;
    use crate::test_fixtures::create_temp_dir;
    use serial_test::serial;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(SettingsFile::default(), env_from(&[]), None)
            .expect("defaults should be valid");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_precedence_flag_over_env_over_file() {
        let file = SettingsFile {
            registry_url: Some("https://file.example/modules".to_string()),
            timeout_secs: Some(5),
        };

        let from_file = Settings::resolve(file.clone(), env_from(&[]), None).unwrap();
        assert_eq!(from_file.registry_url, "https://file.example/modules");
        assert_eq!(from_file.timeout, Duration::from_secs(5));

        let env = env_from(&[
            (REGISTRY_URL_ENV, "https://env.example/modules"),
            (TIMEOUT_ENV, "12"),
        ]);
        let from_env = Settings::resolve(file.clone(), &env, None).unwrap();
        assert_eq!(from_env.registry_url, "https://env.example/modules");
        assert_eq!(from_env.timeout, Duration::from_secs(12));

        let from_flag =
            Settings::resolve(file, &env, Some("http://localhost:8080/module")).unwrap();
        assert_eq!(from_flag.registry_url, "http://localhost:8080/module");
    }

    #[test]
    fn test_invalid_registry_url() {
        let result = Settings::resolve(SettingsFile::default(), env_from(&[]), Some("not a url"));
        assert!(matches!(result, Err(SolmodError::ConfigInvalid { .. })));

        let result = Settings::resolve(
            SettingsFile::default(),
            env_from(&[]),
            Some("ftp://registry.example/"),
        );
        assert!(matches!(result, Err(SolmodError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = Settings::resolve(
            SettingsFile::default(),
            env_from(&[(TIMEOUT_ENV, "soon")]),
            None,
        );
        assert!(matches!(result, Err(SolmodError::ConfigInvalid { .. })));

        let zero = SettingsFile {
            registry_url: None,
            timeout_secs: Some(0),
        };
        assert!(Settings::resolve(zero, env_from(&[]), None).is_err());
    }

    #[test]
    fn test_settings_file_from_yaml() {
        let file = SettingsFile::from_yaml("registry_url: https://r.example/\ntimeout_secs: 3\n")
            .expect("valid YAML");
        assert_eq!(file.registry_url.as_deref(), Some("https://r.example/"));
        assert_eq!(file.timeout_secs, Some(3));

        assert_eq!(SettingsFile::from_yaml("").unwrap(), SettingsFile::default());
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp = create_temp_dir();
        let file = SettingsFile::read(&temp.path().join("absent.yaml")).unwrap();
        assert_eq!(file, SettingsFile::default());
    }

    #[test]
    fn test_read_malformed_file() {
        let temp = create_temp_dir();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "registry_url: [unclosed").unwrap();

        let result = SettingsFile::read(&path);
        assert!(matches!(result, Err(SolmodError::ConfigParseFailed { .. })));
    }

    #[test]
    #[serial]
    fn test_load_uses_config_env_path() {
        let temp = create_temp_dir();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "registry_url: http://127.0.0.1:9/modules\n").unwrap();

        // SAFETY: serialized with every other test touching the process environment
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &path);
            std::env::remove_var(REGISTRY_URL_ENV);
            std::env::remove_var(TIMEOUT_ENV);
        }
        let settings = Settings::load(None);
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }

        assert_eq!(
            settings.expect("settings should load").registry_url,
            "http://127.0.0.1:9/modules"
        );
    }
}

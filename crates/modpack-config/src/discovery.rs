//! File-based config discovery for CLI use
//!
//! Handles finding and loading the project configuration from the filesystem.
//! Priority: environment (`MODPACK_*`) > config file > defaults.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::project::ProjectConfig;

pub const CONFIG_FILE_NAME: &str = "modpack.toml";
pub const PACKAGE_JSON_FIELD: &str = "modpack";
pub const ENV_PREFIX: &str = "MODPACK_";

/// Where a configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    Json(PathBuf),
    /// The `modpack` field of a `package.json`
    PackageJson(PathBuf),
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use modpack_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// assert!(config.npm.cjs_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
    explicit: Option<PathBuf>,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            explicit: None,
        }
    }

    /// Use a specific file instead of searching. Relative paths resolve
    /// against the root.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.explicit = Some(if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        });
        self
    }

    /// Find the config source
    ///
    /// Searches in this order:
    /// 1. The explicitly requested file (must exist)
    /// 2. `modpack.toml`
    /// 3. `package.json` with a `modpack` field
    pub fn find(&self) -> Result<Option<ConfigSource>> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            return Ok(Some(if is_json {
                ConfigSource::Json(path.clone())
            } else {
                ConfigSource::Toml(path.clone())
            }));
        }

        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Ok(Some(ConfigSource::Toml(toml_path)));
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() && package_json_field(&pkg_path)?.is_some() {
            return Ok(Some(ConfigSource::PackageJson(pkg_path)));
        }

        Ok(None)
    }

    /// Load the project configuration. A project without any config file
    /// gets the defaults.
    pub fn load(&self) -> Result<ProjectConfig> {
        let source = self.find()?;
        tracing::debug!(?source, "loading project config");

        let mut figment = Figment::new();
        figment = match &source {
            Some(ConfigSource::Toml(path)) => figment.merge(Toml::file(path)),
            Some(ConfigSource::Json(path)) => figment.merge(Json::file(path)),
            Some(ConfigSource::PackageJson(path)) => {
                let field = package_json_field(path)?.unwrap_or(Value::Null);
                figment.merge(Serialized::defaults(field))
            }
            None => figment,
        };
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .map(|key| env_key_path(key.as_str()).into())
                .lowercase(false),
        );

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Env keys are case-insensitive; each segment maps onto the camelCase
/// field names used in the config files, so `NPM__ES_MODULES` and
/// `NPM__ESMODULES` both set `npm.esModules`.
fn env_key_path(key: &str) -> String {
    key.split('.').map(env_key_segment).collect::<Vec<_>>().join(".")
}

fn env_key_segment(segment: &str) -> String {
    let lower = segment.to_ascii_lowercase();
    if lower == "esmodules" {
        return "esModules".to_string();
    }

    let mut out = String::with_capacity(lower.len());
    let mut upper_next = false;
    for ch in lower.chars() {
        if ch == '_' && !out.is_empty() {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn package_json_field(path: &Path) -> Result<Option<Value>> {
    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Object(_)) => Ok(Some(value.clone())),
        Some(_) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'modpack' field of package.json must be an object".to_string()),
        }),
    }
}

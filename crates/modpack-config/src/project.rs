//! The whole project configuration file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::merge::compose;
use crate::plugin::{PluginConfig, PluginOptions};
use crate::user::{NpmConfig, UserConfig};

/// Contents of `modpack.toml` (or the `modpack` field of `package.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub npm: NpmConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terser: Option<Value>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub babel: Value,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginOptions>,

    #[serde(default)]
    pub bundler: BundlerSettings,
}

/// How the external bundler is launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlerSettings {
    /// Program followed by leading arguments; `--spec <file>` is appended
    #[serde(default = "default_bundler_command")]
    pub command: Vec<String>,
}

impl Default for BundlerSettings {
    fn default() -> Self {
        Self {
            command: default_bundler_command(),
        }
    }
}

pub fn default_bundler_command() -> Vec<String> {
    ["npx", "--no-install", "modpack-bundle"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl ProjectConfig {
    /// Plugins from the file plus any named on the command line.
    pub fn plugin_config<S: AsRef<str>>(&self, extra: &[S]) -> Result<PluginConfig> {
        let config = PluginConfig {
            plugins: self.plugins.clone(),
        }
        .with_names(extra);
        config.validate()?;
        Ok(config)
    }

    /// Target settings, with plugin transpile fragments layered beneath the
    /// project's own `babel` overrides.
    pub fn user_config(&self, plugins: &PluginConfig) -> Result<UserConfig> {
        if !self.babel.is_null() && !self.babel.is_object() {
            return Err(ConfigError::InvalidValue {
                field: "babel".to_string(),
                hint: Some("Transpile overrides must be a table".to_string()),
            });
        }

        let fragments: Vec<&Value> = plugins.babel_fragments().chain([&self.babel]).collect();
        let babel = if fragments.iter().all(|f| f.is_null()) {
            Value::Null
        } else {
            compose(fragments)
        };

        let config = UserConfig {
            npm: self.npm.clone(),
            terser: self.terser.clone(),
            babel,
        };
        config.validate()?;
        Ok(config)
    }
}

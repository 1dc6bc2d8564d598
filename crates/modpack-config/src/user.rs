//! Per-target settings declared by the project.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which outputs to produce and how.
///
/// Module builds are on unless explicitly disabled; the standalone bundle is
/// off unless explicitly enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    #[serde(default)]
    pub npm: NpmConfig,

    /// `false` disables the minified standalone pass; an object is passed
    /// through as minifier options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terser: Option<Value>,

    /// Transpile overrides merged over every composed transpile config
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub babel: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmConfig {
    /// CommonJS build into `lib/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cjs: Option<bool>,

    /// ES modules build into `es/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es_modules: Option<bool>,

    /// Standalone UMD bundle into `umd/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umd: Option<UmdSetting>,
}

/// The forms accepted for `npm.umd`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UmdSetting {
    /// `umd = true` / `umd = false`
    Toggle(bool),
    /// `umd = "MyLibrary"`, shorthand for the global name
    Global(String),
    Options(UmdConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmdConfig {
    /// Entry module, overriding the conventional `src/index.js`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Global variable the bundle is exposed as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,

    /// Module id → global variable for dependencies left out of the bundle
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub externals: IndexMap<String, String>,
}

impl NpmConfig {
    pub fn cjs_enabled(&self) -> bool {
        self.cjs != Some(false)
    }

    pub fn es_modules_enabled(&self) -> bool {
        self.es_modules != Some(false)
    }

    /// Normalized UMD settings, or `None` when the bundle is not requested.
    pub fn umd(&self) -> Option<UmdConfig> {
        match self.umd.as_ref()? {
            UmdSetting::Toggle(false) => None,
            UmdSetting::Toggle(true) => Some(UmdConfig::default()),
            UmdSetting::Global(global) => Some(UmdConfig {
                global: Some(global.clone()),
                ..UmdConfig::default()
            }),
            UmdSetting::Options(options) => Some(options.clone()),
        }
    }
}

impl UserConfig {
    /// Minification is on unless `terser` is literally `false`.
    pub fn minify_enabled(&self) -> bool {
        !matches!(self.terser, Some(Value::Bool(false)))
    }

    pub fn umd_enabled(&self) -> bool {
        self.npm.umd().is_some()
    }
}

//! Transpile configuration fragments and the per-target configs derived from them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::merge::compose;

/// Layered transpiler options supplied by the caller of a build.
///
/// Each fragment is an arbitrary nested mapping. Missing fragments are
/// `null` and contribute nothing when composed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Options shared by every target
    #[serde(default)]
    pub base: Value,

    /// Applied on top of `base` for the module builds
    #[serde(default)]
    pub dev: Value,

    /// Applied on top of `base` for the minified standalone pass
    #[serde(default)]
    pub prod: Value,
}

impl BuildConfig {
    pub fn new(base: Value) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_dev(mut self, dev: Value) -> Self {
        self.dev = dev;
        self
    }

    pub fn with_prod(mut self, prod: Value) -> Self {
        self.prod = prod;
        self
    }

    /// CommonJS build: modules transpiled to CommonJS with default-export interop.
    pub fn legacy_module(&self) -> Value {
        compose([
            &self.base,
            &self.dev,
            &json!({
                // Runtime helpers must resolve from the consumer's dependencies
                "absoluteRuntime": false,
                "modules": "commonjs",
                "commonJSInterop": true,
                "webpack": false,
            }),
        ])
    }

    /// ES modules build: import/export syntax is preserved.
    pub fn modern_module(&self) -> Value {
        compose([
            &self.base,
            &self.dev,
            &json!({
                "absoluteRuntime": false,
                "webpack": false,
            }),
        ])
    }

    /// First (unminified) standalone pass. Bundler-specific plugins are left
    /// as the caller configured them in `base`.
    pub fn standalone_dev(&self) -> Value {
        compose([&self.base])
    }

    /// Second (minified) standalone pass.
    pub fn standalone_prod(&self) -> Value {
        compose([&self.base, &self.prod])
    }
}

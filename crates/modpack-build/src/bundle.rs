//! Standalone UMD bundles through the external bundler.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use modpack_config::{BuildConfig, PackageMeta, UmdConfig, UserConfig, merge_values};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collaborators::{Bundler, SizeReporter, StatusReporter};
use crate::env::BuildEnv;
use crate::error::{BuildError, Result};

pub const UMD_DIR: &str = "umd";
pub const DEFAULT_ENTRY: &str = "src/index.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlePass {
    Unminified,
    Minified,
}

impl fmt::Display for BundlePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unminified => f.write_str("unminified"),
            Self::Minified => f.write_str("minified"),
        }
    }
}

/// How one external dependency is reached from each module system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSpec {
    pub root: String,
    pub commonjs: String,
    pub commonjs2: String,
    pub amd: String,
}

/// Expand `module id → global` pairs into per-module-system externals.
pub fn create_externals(externals: &IndexMap<String, String>) -> IndexMap<String, ExternalSpec> {
    externals
        .iter()
        .map(|(module, global)| {
            (
                module.clone(),
                ExternalSpec {
                    root: global.clone(),
                    commonjs: module.clone(),
                    commonjs2: module.clone(),
                    amd: module.clone(),
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleOutput {
    pub path: PathBuf,
    pub filename: String,
    pub library: String,
    pub library_export: String,
    pub library_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePlugins {
    pub banner: String,
    pub terser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terser_options: Option<Value>,
}

/// One bundler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSpec {
    pub pass: BundlePass,
    pub entry: String,
    pub output: BundleOutput,
    pub externals: IndexMap<String, ExternalSpec>,
    pub plugins: BundlePlugins,
    /// Transpile config the bundler applies to sources
    pub babel: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
}

impl BundleSpec {
    /// Output file relative to the project root.
    pub fn output_file(&self) -> PathBuf {
        self.output.path.join(&self.output.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gzip_size: Option<u64>,
}

/// What one bundler pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleStats {
    pub assets: Vec<AssetStats>,
}

impl BundleStats {
    pub fn total_size(&self) -> u64 {
        self.assets.iter().map(|a| a.size).sum()
    }
}

/// Produces `umd/<name>.js` and, unless minification is off,
/// `umd/<name>.min.js`.
pub struct BundleBuilder<'a> {
    bundler: &'a dyn Bundler,
    sizes: &'a dyn SizeReporter,
    status: &'a dyn StatusReporter,
}

impl<'a> BundleBuilder<'a> {
    pub fn new(
        bundler: &'a dyn Bundler,
        sizes: &'a dyn SizeReporter,
        status: &'a dyn StatusReporter,
    ) -> Self {
        Self {
            bundler,
            sizes,
            status,
        }
    }

    /// Entry used for the bundle: the explicit override, then the configured
    /// entry, then [`DEFAULT_ENTRY`].
    pub fn resolve_entry(entry_override: Option<&str>, umd: &UmdConfig) -> String {
        entry_override
            .or(umd.entry.as_deref())
            .unwrap_or(DEFAULT_ENTRY)
            .to_string()
    }

    /// The first, unminified pass.
    pub fn unminified_spec(
        entry: &str,
        package: &PackageMeta,
        umd: &UmdConfig,
        build: &BuildConfig,
        user: &UserConfig,
    ) -> BundleSpec {
        let mut babel = build.standalone_dev();
        if !user.babel.is_null() {
            merge_values(&mut babel, &user.babel);
        }

        BundleSpec {
            pass: BundlePass::Unminified,
            entry: entry.to_string(),
            output: BundleOutput {
                path: PathBuf::from(UMD_DIR),
                filename: format!("{}.js", package.file_stem()),
                library: umd.global.clone().unwrap_or_else(|| package.default_global()),
                library_export: "default".to_string(),
                library_target: "umd".to_string(),
            },
            externals: create_externals(&umd.externals),
            plugins: BundlePlugins {
                banner: package.banner(),
                terser: false,
                terser_options: None,
            },
            babel,
            devtool: None,
        }
    }

    /// Derive the minified pass from the unminified one.
    pub fn minified_spec(
        first: &BundleSpec,
        package: &PackageMeta,
        build: &BuildConfig,
        user: &UserConfig,
    ) -> BundleSpec {
        let mut babel = build.standalone_prod();
        if !user.babel.is_null() {
            merge_values(&mut babel, &user.babel);
        }

        let mut spec = first.clone();
        spec.pass = BundlePass::Minified;
        spec.output.filename = format!("{}.min.js", package.file_stem());
        spec.plugins.terser = true;
        spec.plugins.terser_options = user.terser.clone().filter(Value::is_object);
        spec.babel = babel;
        spec.devtool = Some("source-map".to_string());
        spec
    }

    /// Run one or two bundler passes and report the sizes.
    ///
    /// Both passes run as `production` whatever environment the module
    /// builds used. A failing pass ends the bundle step with its own error;
    /// the minified pass never runs after a failed unminified one.
    pub async fn run(
        &self,
        entry_override: Option<&str>,
        package: &PackageMeta,
        umd: &UmdConfig,
        build: &BuildConfig,
        user: &UserConfig,
    ) -> Result<()> {
        let env = BuildEnv::production();
        let entry = Self::resolve_entry(entry_override, umd);
        let status = self.status.start("Creating UMD builds");

        let first = Self::unminified_spec(&entry, package, umd, build, user);
        tracing::debug!(entry = %first.entry, file = %first.output_file().display(), "bundling unminified");
        let first_stats = match self.bundler.bundle(&first, &env).await {
            Ok(stats) => stats,
            Err(source) => {
                status.fail();
                return Err(BuildError::BundleBuild {
                    pass: BundlePass::Unminified,
                    source,
                });
            }
        };

        if !user.minify_enabled() {
            status.succeed();
            self.sizes.report(&first_stats, None);
            return Ok(());
        }

        let second = Self::minified_spec(&first, package, build, user);
        tracing::debug!(file = %second.output_file().display(), "bundling minified");
        let second_stats = match self.bundler.bundle(&second, &env).await {
            Ok(stats) => stats,
            Err(source) => {
                status.fail();
                return Err(BuildError::BundleBuild {
                    pass: BundlePass::Minified,
                    source,
                });
            }
        };

        status.succeed();
        self.sizes.report(&first_stats, Some(&second_stats));
        Ok(())
    }
}

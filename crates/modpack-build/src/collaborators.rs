//! Capabilities a build depends on but does not implement itself.
//!
//! The CLI provides terminal-backed implementations; tests substitute
//! recording doubles.

use std::path::Path;

use async_trait::async_trait;
use modpack_config::{PackageMeta, PluginConfig, UserConfig};

use crate::bundle::{BundleSpec, BundleStats};
use crate::env::BuildEnv;

/// Removes output left over from a previous build.
#[async_trait]
pub trait Cleaner: Send + Sync {
    async fn clean(&self, project_root: &Path) -> anyhow::Result<()>;
}

/// Supplies the structured configuration a build consumes.
pub trait ConfigLoader: Send + Sync {
    fn load_plugin_config(&self) -> modpack_config::Result<PluginConfig>;

    fn load_user_config(&self, plugins: &PluginConfig) -> modpack_config::Result<UserConfig>;

    fn load_package(&self) -> modpack_config::Result<PackageMeta>;
}

/// Runs the external bundler once.
#[async_trait]
pub trait Bundler: Send + Sync {
    async fn bundle(&self, spec: &BundleSpec, env: &BuildEnv) -> anyhow::Result<BundleStats>;
}

/// Reports artifact sizes. `minified` is present when two passes ran.
pub trait SizeReporter: Send + Sync {
    fn report(&self, unminified: &BundleStats, minified: Option<&BundleStats>);
}

/// Starts progress indicators.
pub trait StatusReporter: Send + Sync {
    fn start(&self, label: &str) -> Box<dyn StatusHandle>;
}

/// One running progress indicator, finished exactly once.
pub trait StatusHandle: Send {
    fn succeed(self: Box<Self>);

    fn fail(self: Box<Self>);
}

/// Status reporting through `tracing` for non-interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatus;

struct TracingStatusHandle {
    label: String,
}

impl StatusReporter for TracingStatus {
    fn start(&self, label: &str) -> Box<dyn StatusHandle> {
        tracing::info!("{}", label);
        Box::new(TracingStatusHandle {
            label: label.to_string(),
        })
    }
}

impl StatusHandle for TracingStatusHandle {
    fn succeed(self: Box<Self>) {
        tracing::info!("{}: done", self.label);
    }

    fn fail(self: Box<Self>) {
        tracing::error!("{}: failed", self.label);
    }
}

//! Assembles and drives one build.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use modpack_config::{BuildConfig, ConfigError, UserConfig};
use serde_json::Value;

use crate::bundle::BundleBuilder;
use crate::collaborators::{Bundler, Cleaner, ConfigLoader, SizeReporter, StatusReporter};
use crate::env::BuildEnv;
use crate::error::{BuildError, Result};
use crate::process::ProcessRunner;
use crate::sequencer::run_series;
use crate::temp_config::ConfigFileName;
use crate::transpile::{TranspileOptions, TranspileRunner, TranspilerCommand};

pub const SRC_DIR: &str = "src";
pub const LIB_DIR: &str = "lib";
pub const ES_DIR: &str = "es";

/// The two module builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleTarget {
    /// CommonJS into `lib/`
    Legacy,
    /// ES modules into `es/`
    Modern,
}

impl ModuleTarget {
    /// Name shown in status output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Legacy => "ES5",
            Self::Modern => "ES modules",
        }
    }

    pub fn out_dir(self) -> &'static str {
        match self {
            Self::Legacy => LIB_DIR,
            Self::Modern => ES_DIR,
        }
    }

    pub fn transpile_config(self, build: &BuildConfig) -> Value {
        match self {
            Self::Legacy => build.legacy_module(),
            Self::Modern => build.modern_module(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    Clean,
    Transpile(ModuleTarget),
    Bundle,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => f.write_str("clean"),
            Self::Transpile(target) => write!(f, "transpile {}", target.label()),
            Self::Bundle => f.write_str("umd bundle"),
        }
    }
}

/// Steps for a build, in execution order.
///
/// Cleaning always comes first. Module builds are on unless disabled; the
/// UMD bundle only runs when requested.
pub fn plan(user: &UserConfig) -> Vec<BuildStep> {
    let mut steps = vec![BuildStep::Clean];
    if user.npm.cjs_enabled() {
        steps.push(BuildStep::Transpile(ModuleTarget::Legacy));
    }
    if user.npm.es_modules_enabled() {
        steps.push(BuildStep::Transpile(ModuleTarget::Modern));
    }
    if user.umd_enabled() {
        steps.push(BuildStep::Bundle);
    }
    steps
}

/// Per-invocation inputs from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub project_root: PathBuf,
    /// Overrides the UMD entry module
    pub entry: Option<String>,
    pub copy_files: bool,
    pub extensions: Option<String>,
    /// Build environment requested by the caller, `production` when absent
    pub env_marker: Option<String>,
}

impl BuildRequest {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            entry: None,
            copy_files: false,
            extensions: None,
            env_marker: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    pub fn with_env_marker(mut self, marker: impl Into<String>) -> Self {
        self.env_marker = Some(marker.into());
        self
    }
}

/// Everything a build talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub cleaner: Arc<dyn Cleaner>,
    pub config: Arc<dyn ConfigLoader>,
    pub bundler: Arc<dyn Bundler>,
    pub sizes: Arc<dyn SizeReporter>,
    pub status: Arc<dyn StatusReporter>,
    pub processes: Arc<dyn ProcessRunner>,
}

struct RunContext<'a> {
    request: &'a BuildRequest,
    build: &'a BuildConfig,
    user: UserConfig,
    options: TranspileOptions,
    env: BuildEnv,
    transpiler: TranspilerCommand,
}

pub struct BuildOrchestrator {
    collaborators: Collaborators,
    transpiler: Option<TranspilerCommand>,
}

impl BuildOrchestrator {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            transpiler: None,
        }
    }

    /// Use a fixed transpiler command instead of resolving one per project.
    pub fn with_transpiler(mut self, command: TranspilerCommand) -> Self {
        self.transpiler = Some(command);
        self
    }

    /// Run a full build and return the steps that were executed.
    ///
    /// The first failing step ends the build; its error is returned as is.
    pub async fn run(&self, request: &BuildRequest, build: &BuildConfig) -> Result<Vec<BuildStep>> {
        let root = &request.project_root;
        let config_file = ConfigFileName::resolve(root);
        let env = BuildEnv::from_marker(request.env_marker.as_deref());
        tracing::debug!(root = %root.display(), env = %env, "starting build");

        let plugins = self.collaborators.config.load_plugin_config()?;
        let user = self.collaborators.config.load_user_config(&plugins)?;

        let steps = plan(&user);
        tracing::debug!(steps = ?steps, "build plan");

        let ctx = RunContext {
            request,
            build,
            options: TranspileOptions {
                copy_files: request.copy_files,
                src_dir: SRC_DIR.to_string(),
                out_dir: LIB_DIR.to_string(),
                extensions: request.extensions.clone(),
                config_file,
            },
            user,
            env,
            transpiler: self
                .transpiler
                .clone()
                .unwrap_or_else(|| TranspilerCommand::resolve(root)),
        };

        let ctx = &ctx;
        run_series(steps.iter().copied(), move |step| self.run_step(step, ctx)).await?;
        Ok(steps)
    }

    async fn run_step(&self, step: BuildStep, ctx: &RunContext<'_>) -> Result<()> {
        tracing::debug!(%step, "running build step");
        match step {
            BuildStep::Clean => self
                .collaborators
                .cleaner
                .clean(&ctx.request.project_root)
                .await
                .map_err(BuildError::Clean),

            BuildStep::Transpile(target) => {
                let runner = TranspileRunner::new(
                    self.collaborators.processes.as_ref(),
                    self.collaborators.status.as_ref(),
                    &ctx.transpiler,
                    &ctx.request.project_root,
                );
                runner
                    .run(
                        target.label(),
                        &ctx.options.with_out_dir(target.out_dir()),
                        &target.transpile_config(ctx.build),
                        &ctx.user,
                        &ctx.env,
                    )
                    .await
            }

            BuildStep::Bundle => {
                let Some(umd) = ctx.user.npm.umd() else {
                    return Ok(());
                };
                let package = self.collaborators.config.load_package()?;
                if package.name.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "package.json name".to_string(),
                        hint: Some("A package name is needed to name the UMD bundle".to_string()),
                    }
                    .into());
                }

                BundleBuilder::new(
                    self.collaborators.bundler.as_ref(),
                    self.collaborators.sizes.as_ref(),
                    self.collaborators.status.as_ref(),
                )
                .run(
                    ctx.request.entry.as_deref(),
                    &package,
                    &umd,
                    ctx.build,
                    &ctx.user,
                )
                .await
            }
        }
    }
}

//! Module builds through the external transpiler.

use std::path::{Path, PathBuf};

use modpack_config::{UserConfig, merge_values};
use serde_json::{Value, json};

use crate::collaborators::StatusReporter;
use crate::env::BuildEnv;
use crate::error::{BuildError, Result};
use crate::process::{Invocation, ProcessRunner};
use crate::temp_config::{ConfigFileName, TempConfigFile};

/// Source files the transpiler never copies into published output.
pub const DEFAULT_IGNORE: [&str; 3] = ["**/*.spec.js", "**/*.test.js", "**/__tests__/"];

const LOCAL_BIN: &str = "node_modules/.bin/babel";

/// How the transpiler is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspilerCommand {
    pub program: String,
    pub leading_args: Vec<String>,
}

impl TranspilerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Prefer the project's own install, otherwise go through `npx` without
    /// letting it download anything.
    pub fn resolve(project_root: &Path) -> Self {
        let local = project_root.join(LOCAL_BIN);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "using project-local transpiler");
            return Self::new(local.to_string_lossy());
        }

        Self {
            program: "npx".to_string(),
            leading_args: vec!["--no-install".to_string(), "babel".to_string()],
        }
    }
}

/// Command-line options shared by every module build of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    pub copy_files: bool,
    pub src_dir: String,
    pub out_dir: String,
    pub extensions: Option<String>,
    pub config_file: ConfigFileName,
}

impl TranspileOptions {
    /// The same options writing into another directory.
    pub fn with_out_dir(&self, out_dir: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..self.clone()
        }
    }

    /// `<src> --out-dir <out> --quiet [--copy-files --no-copy-ignored]
    /// [--extensions <list>] [--config-file <abs>]`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.src_dir.clone(),
            "--out-dir".to_string(),
            self.out_dir.clone(),
            "--quiet".to_string(),
        ];

        if self.copy_files {
            args.push("--copy-files".to_string());
            args.push("--no-copy-ignored".to_string());
        }

        if let Some(extensions) = &self.extensions {
            args.push("--extensions".to_string());
            args.push(extensions.clone());
        }

        if !self.config_file.is_default() {
            let path = self.config_file.path();
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            args.push("--config-file".to_string());
            args.push(absolute.to_string_lossy().into_owned());
        }

        args
    }
}

/// What gets written to the temporary config: the composed config with the
/// user's overrides on top and the ignore list set.
pub fn transpile_config(composed: &Value, user: &UserConfig) -> Value {
    let mut config = composed.clone();
    if !user.babel.is_null() {
        merge_values(&mut config, &user.babel);
    }
    if !config.is_object() {
        config = json!({});
    }
    if let Some(map) = config.as_object_mut() {
        map.insert("ignore".to_string(), json!(DEFAULT_IGNORE));
    }
    config
}

/// Runs one module build.
pub struct TranspileRunner<'a> {
    processes: &'a dyn ProcessRunner,
    status: &'a dyn StatusReporter,
    command: &'a TranspilerCommand,
    cwd: PathBuf,
}

impl<'a> TranspileRunner<'a> {
    pub fn new(
        processes: &'a dyn ProcessRunner,
        status: &'a dyn StatusReporter,
        command: &'a TranspilerCommand,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            processes,
            status,
            command,
            cwd: cwd.into(),
        }
    }

    /// Write the config, run the transpiler, then remove the config.
    ///
    /// The config file is removed whatever the transpiler did. A transpile
    /// failure wins over a cleanup failure.
    pub async fn run(
        &self,
        target: &str,
        options: &TranspileOptions,
        composed: &Value,
        user: &UserConfig,
        env: &BuildEnv,
    ) -> Result<()> {
        let config = transpile_config(composed, user);
        tracing::debug!(target, config = %config, "composed transpile config");

        let file = TempConfigFile::create(options.config_file.path(), &config).await?;

        let invocation = Invocation::new(self.command.program.clone(), self.cwd.clone())
            .args(self.command.leading_args.iter().cloned())
            .args(options.args());

        let status = self.status.start(&format!("Creating {} build", target));
        let exit = self.processes.run(&invocation, env).await;

        let outcome = match exit {
            Ok(exit) if exit.success() => {
                status.succeed();
                Ok(())
            }
            Ok(exit) => {
                tracing::debug!(target, code = ?exit.code(), "transpiler exited unsuccessfully");
                status.fail();
                Err(BuildError::TranspileProcess {
                    target: target.to_string(),
                })
            }
            Err(e) => {
                tracing::debug!(target, command = %invocation, error = %e, "failed to start transpiler");
                status.fail();
                Err(BuildError::TranspileProcess {
                    target: target.to_string(),
                })
            }
        };

        let cleanup = file.remove().await;
        if let (Err(_), Err(e)) = (&outcome, &cleanup) {
            tracing::warn!(target, error = %e, "temporary config cleanup also failed");
        }
        outcome.and(cleanup)
    }
}

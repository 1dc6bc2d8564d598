//! Build command implementation.
//!
//! Wires the terminal-backed collaborators into a [`BuildOrchestrator`] and
//! runs one build for the project.

use std::sync::Arc;
use std::time::Instant;

use modpack_build::env::ENV_VAR;
use modpack_build::{BuildOrchestrator, BuildRequest, Collaborators, NativeProcessRunner};

use crate::bundler::CommandBundler;
use crate::cli::BuildArgs;
use crate::commands::clean::DirCleaner;
use crate::commands::utils;
use crate::config::FileConfigLoader;
use crate::error::Result;
use crate::ui::{self, TerminalSizeReporter, TerminalStatus};

/// Execute the build command.
///
/// # Build Process
///
/// 1. Resolve the project root and load the configuration
/// 2. Remove `lib/`, `es/` and `umd/`
/// 3. Run the CommonJS and ES module builds unless disabled
/// 4. Bundle the UMD build when enabled
///
/// A `NODE_ENV` already set in the environment is kept as the build
/// environment; otherwise builds run as `production`.
pub async fn execute(args: BuildArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let root = utils::resolve_project_root(args.cwd.as_deref())?;
    let loader = FileConfigLoader::load(&root, args.config.as_deref(), &args.plugins)?;
    let build_config = loader.project().build.clone();
    let bundler = CommandBundler::new(loader.project().bundler.command.clone(), &root);

    let collaborators = Collaborators {
        cleaner: Arc::new(DirCleaner),
        config: Arc::new(loader),
        bundler: Arc::new(bundler),
        sizes: Arc::new(TerminalSizeReporter::new(quiet)),
        status: Arc::new(TerminalStatus::new(quiet)),
        processes: Arc::new(NativeProcessRunner),
    };

    let request = BuildRequest {
        project_root: root,
        entry: args.entry,
        copy_files: args.copy_files,
        extensions: args.extensions,
        env_marker: std::env::var(ENV_VAR).ok(),
    };

    let steps = BuildOrchestrator::new(collaborators)
        .run(&request, &build_config)
        .await?;
    tracing::debug!(steps = steps.len(), "build finished");

    if !quiet {
        ui::success(&format!(
            "Build completed in {}",
            ui::format_duration(start_time.elapsed())
        ));
    }
    Ok(())
}

//! Clean command implementation and the cleaner used by `modpack build`.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use modpack_build::bundle::UMD_DIR;
use modpack_build::orchestrator::{ES_DIR, LIB_DIR};
use modpack_build::{BuildError, Cleaner};

use crate::cli::CleanArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Directories a build writes to.
pub const OUTPUT_DIRS: [&str; 3] = [LIB_DIR, ES_DIR, UMD_DIR];

/// Removes [`OUTPUT_DIRS`]. Directories that do not exist are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirCleaner;

#[async_trait]
impl Cleaner for DirCleaner {
    async fn clean(&self, project_root: &Path) -> anyhow::Result<()> {
        for dir in OUTPUT_DIRS {
            let path = project_root.join(dir);
            match tokio::fs::remove_dir_all(&path).await {
                Ok(()) => tracing::debug!(path = %path.display(), "removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("failed to remove {}", path.display())));
                }
            }
        }
        Ok(())
    }
}

/// Execute the clean command.
pub async fn execute(args: CleanArgs, quiet: bool) -> Result<()> {
    let root = utils::resolve_project_root(args.cwd.as_deref())?;
    DirCleaner.clean(&root).await.map_err(BuildError::Clean)?;

    if !quiet {
        ui::success(&format!("Removed {}", OUTPUT_DIRS.map(|d| format!("{}/", d)).join(", ")));
    }
    Ok(())
}

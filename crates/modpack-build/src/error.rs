//! Errors surfaced by build steps.
//!
//! Every step error bubbles unchanged through the sequencer to the caller;
//! the first one encountered ends the build.

use std::path::PathBuf;

use modpack_config::ConfigError;
use thiserror::Error;

use crate::bundle::BundlePass;

pub type Result<T, E = BuildError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The temporary transpile config could not be written; the transpiler
    /// was never started.
    #[error("failed to write temporary transpile config {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transpiler exited unsuccessfully or could not be started. Its own
    /// output went straight to the terminal.
    #[error("{target} transpilation failed")]
    TranspileProcess { target: String },

    /// The temporary transpile config could not be removed after the
    /// transpiler finished.
    #[error("failed to remove temporary transpile config {}: {source}", .path.display())]
    ConfigCleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{pass} bundle build failed: {source}")]
    BundleBuild {
        pass: BundlePass,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to clean previous build output: {0}")]
    Clean(#[source] anyhow::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

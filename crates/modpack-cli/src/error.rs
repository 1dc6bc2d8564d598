//! Error handling for the modpack CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`. `main` turns
//! the final error into a `miette` report, so every failure exits with a
//! nonzero status.

mod report;

use thiserror::Error;

pub use modpack_build::BuildError;
pub use modpack_config::ConfigError;
pub use report::{cli_error_to_miette, hint_for};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating modpack.toml / package.json
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A build step failed
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

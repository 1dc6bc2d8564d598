//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("package.json not found in {}", .0.display())]
    PackageJsonNotFound(PathBuf),

    #[error("invalid value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    #[error("schema validation failed: {message}{}", .hint.as_ref().map(|h| format!("\n\nHint: {h}")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Shared utilities for command implementations.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// The project directory: `--cwd` when given, otherwise the current
/// directory.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if `--cwd` does not name an existing
/// directory.
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let current_dir = get_cwd()?;
    let Some(cwd_path) = explicit_cwd else {
        return Ok(current_dir);
    };

    let absolute = resolve_path(cwd_path, &current_dir);
    if !absolute.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd directory does not exist: {}",
            absolute.display()
        )));
    }

    if !absolute.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd is not a directory: {}",
            absolute.display()
        )));
    }

    tracing::debug!(root = %absolute.display(), "using project root from --cwd");
    Ok(absolute)
}

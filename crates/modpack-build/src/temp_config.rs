//! The temporary transpile configuration file.
//!
//! The transpiler only reads its configuration from disk, so every module
//! build writes one, runs the transpiler, and removes it again. A project's
//! own `.babelrc` is never touched: when one exists the build writes to
//! `.babelrc.build` instead and passes that path explicitly.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BuildError, Result};

/// Name the transpiler picks up without being told.
pub const DEFAULT_CONFIG_FILE: &str = ".babelrc";

/// Appended to [`DEFAULT_CONFIG_FILE`] when the project already has one.
pub const COLLISION_SUFFIX: &str = ".build";

/// Where the temporary config is written for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileName {
    path: PathBuf,
    is_default: bool,
}

impl ConfigFileName {
    /// Pick the file name for a build rooted at `project_root`.
    pub fn resolve(project_root: &Path) -> Self {
        let default_path = project_root.join(DEFAULT_CONFIG_FILE);
        if !default_path.exists() {
            return Self {
                path: default_path,
                is_default: true,
            };
        }

        let alternative = format!("{}{}", DEFAULT_CONFIG_FILE, COLLISION_SUFFIX);
        tracing::info!(
            "There is a {} in your project. A temporary {} is needed to configure the build, will use {} instead",
            DEFAULT_CONFIG_FILE,
            DEFAULT_CONFIG_FILE,
            alternative
        );
        Self {
            path: project_root.join(alternative),
            is_default: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the transpiler will find the file on its own.
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A written temporary config, removed by [`TempConfigFile::remove`].
///
/// If the guard is dropped without being removed (a panic or a cancelled
/// build) the file is deleted synchronously on drop.
#[derive(Debug)]
#[must_use = "the temporary config must be removed after use"]
pub struct TempConfigFile {
    path: PathBuf,
    armed: bool,
}

impl TempConfigFile {
    /// Serialize `config` as pretty JSON to `path`.
    pub async fn create(path: &Path, config: &Value) -> Result<Self> {
        let write_error = |source: io::Error| BuildError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        let contents = serde_json::to_string_pretty(config).map_err(|e| write_error(e.into()))?;
        tokio::fs::write(path, contents).await.map_err(write_error)?;
        tracing::debug!(path = %path.display(), "wrote temporary transpile config");

        Ok(Self {
            path: path.to_path_buf(),
            armed: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn remove(mut self) -> Result<()> {
        self.armed = false;
        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|source| BuildError::ConfigCleanup {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), "removed temporary transpile config");
        Ok(())
    }
}

impl Drop for TempConfigFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temporary transpile config");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn resolve_uses_default_name_when_free() {
        let dir = TempDir::new().unwrap();
        let name = ConfigFileName::resolve(dir.path());
        assert!(name.is_default());
        assert_eq!(name.path(), dir.path().join(".babelrc"));
    }

    #[test]
    fn resolve_avoids_existing_project_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".babelrc"), "{}").unwrap();

        let name = ConfigFileName::resolve(dir.path());
        assert!(!name.is_default());
        assert_eq!(name.path(), dir.path().join(".babelrc.build"));
    }

    #[tokio::test]
    async fn create_writes_pretty_json_and_remove_deletes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".babelrc");

        let file = TempConfigFile::create(&path, &json!({"presets": ["env"]})).await.unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "{\n  \"presets\": [\n    \"env\"\n  ]\n}");

        file.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn create_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(".babelrc");

        let err = TempConfigFile::create(&path, &json!({})).await.unwrap_err();
        assert!(matches!(err, BuildError::ConfigWrite { .. }));
    }

    #[tokio::test]
    async fn remove_reports_already_deleted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".babelrc");

        let file = TempConfigFile::create(&path, &json!({})).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            file.remove().await,
            Err(BuildError::ConfigCleanup { .. })
        ));
    }

    #[tokio::test]
    async fn dropping_without_remove_still_deletes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".babelrc");

        let file = TempConfigFile::create(&path, &json!({})).await.unwrap();
        drop(file);
        assert!(!path.exists());
    }
}

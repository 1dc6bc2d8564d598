//! UMD bundling through an external bundler command.
//!
//! Each pass writes its [`BundleSpec`] to a temporary JSON file and runs the
//! configured command with `--spec <file>` in the project directory. The
//! command is expected to write `spec.output.path/spec.output.filename`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use modpack_build::{AssetStats, BuildEnv, BundleSpec, BundleStats, Bundler};
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct CommandBundler {
    command: Vec<String>,
    cwd: PathBuf,
}

impl CommandBundler {
    pub fn new(command: Vec<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            command,
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    fn write_spec(spec: &BundleSpec) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("modpack-bundle-")
            .suffix(".json")
            .tempfile()
            .context("failed to create bundle spec file")?;
        serde_json::to_writer_pretty(&mut file, spec)?;
        file.flush()?;
        Ok(file)
    }
}

#[async_trait]
impl Bundler for CommandBundler {
    async fn bundle(&self, spec: &BundleSpec, env: &BuildEnv) -> anyhow::Result<BundleStats> {
        let (program, leading_args) = self
            .command
            .split_first()
            .context("bundler.command is empty")?;

        let spec_file = Self::write_spec(spec)?;
        tracing::debug!(
            command = %self.command.join(" "),
            spec = %spec_file.path().display(),
            pass = %spec.pass,
            "running bundler"
        );

        let status = Command::new(program)
            .args(leading_args)
            .arg("--spec")
            .arg(spec_file.path())
            .current_dir(&self.cwd)
            .envs(env.vars())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to start bundler `{}`", program))?;

        if !status.success() {
            anyhow::bail!("bundler exited with {}", status);
        }

        let path = spec.output_file();
        let metadata = tokio::fs::metadata(self.cwd.join(&path))
            .await
            .with_context(|| format!("bundler did not produce {}", path.display()))?;

        Ok(BundleStats {
            assets: vec![AssetStats {
                name: spec.output.filename.clone(),
                path,
                size: metadata.len(),
                gzip_size: None,
            }],
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use modpack_build::BundleBuilder;
    use modpack_config::{BuildConfig, PackageMeta, UmdConfig, UserConfig};
    use std::fs;
    use tempfile::TempDir;

    fn spec() -> BundleSpec {
        BundleBuilder::unminified_spec(
            "src/index.js",
            &PackageMeta::new("widgets", "1.0.0"),
            &UmdConfig::default(),
            &BuildConfig::default(),
            &UserConfig::default(),
        )
    }

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string(), "bundler".to_string()]
    }

    #[tokio::test]
    async fn test_stats_come_from_the_written_file() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(
            sh(r#"test "$1" = "--spec" && test -f "$2" && mkdir -p umd && printf 'hello' > umd/widgets.js"#),
            dir.path(),
        );

        let stats = bundler.bundle(&spec(), &BuildEnv::production()).await.unwrap();
        assert_eq!(stats.assets.len(), 1);
        assert_eq!(stats.assets[0].name, "widgets.js");
        assert_eq!(stats.assets[0].path, PathBuf::from("umd/widgets.js"));
        assert_eq!(stats.assets[0].size, 5);
    }

    #[tokio::test]
    async fn test_spec_file_is_valid_json() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(
            sh(r#"cp "$2" spec.json && mkdir -p umd && touch umd/widgets.js"#),
            dir.path(),
        );

        bundler.bundle(&spec(), &BuildEnv::production()).await.unwrap();
        let written: BundleSpec =
            serde_json::from_str(&fs::read_to_string(dir.path().join("spec.json")).unwrap()).unwrap();
        assert_eq!(written, spec());
    }

    #[tokio::test]
    async fn test_bundler_sees_build_env() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(
            sh(r#"test "$NODE_ENV" = "staging" && mkdir -p umd && touch umd/widgets.js"#),
            dir.path(),
        );

        assert!(bundler.bundle(&spec(), &BuildEnv::new("staging")).await.is_ok());
    }

    #[tokio::test]
    async fn test_nonzero_exit_fails() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(sh("exit 2"), dir.path());
        assert!(bundler.bundle(&spec(), &BuildEnv::production()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_output_fails() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(sh("exit 0"), dir.path());
        let err = bundler.bundle(&spec(), &BuildEnv::production()).await.unwrap_err();
        assert!(err.to_string().contains("umd/widgets.js"));
    }

    #[tokio::test]
    async fn test_empty_command_fails() {
        let dir = TempDir::new().unwrap();
        let bundler = CommandBundler::new(Vec::new(), dir.path());
        assert!(bundler.bundle(&spec(), &BuildEnv::production()).await.is_err());
    }
}

//! Subprocess execution.
//!
//! The transpiler is run through the [`ProcessRunner`] trait so tests can
//! script exit codes without touching a real toolchain.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::env::BuildEnv;

/// A fully described command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a process ended. `code` is `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    code: Option<i32>,
}

impl ProcessExit {
    pub fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `invocation` to completion with stdio inherited from the caller.
    ///
    /// Returns `Err` only when the process could not be started.
    async fn run(&self, invocation: &Invocation, env: &BuildEnv) -> io::Result<ProcessExit>;
}

/// Spawns real processes with tokio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProcessRunner;

#[async_trait]
impl ProcessRunner for NativeProcessRunner {
    async fn run(&self, invocation: &Invocation, env: &BuildEnv) -> io::Result<ProcessExit> {
        tracing::debug!(command = %invocation, cwd = %invocation.cwd.display(), "spawning");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .envs(env.vars())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(status.into())
    }
}

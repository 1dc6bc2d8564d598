//! Recording test doubles for the build collaborators.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use modpack_build::{
    AssetStats, BuildEnv, BuildOrchestrator, BuildRequest, BundleSpec, BundleStats, Bundler,
    Cleaner, Collaborators, ConfigLoader, Invocation, ProcessExit, ProcessRunner, SizeReporter,
    StatusHandle, StatusReporter, TranspilerCommand,
};
use modpack_config::{BuildConfig, ConfigError, PackageMeta, PluginConfig, UserConfig};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Ordered record of everything the collaborators were asked to do.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// What the fake transpiler does when run.
#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    Exit(i32),
    SpawnError,
    /// Delete the temporary config, then exit with the code
    RemoveConfigAndExit(i32),
}

/// One observed transpiler run.
#[derive(Debug, Clone)]
pub struct ObservedRun {
    pub invocation: Invocation,
    pub env: BuildEnv,
    /// Contents of the temporary config while the transpiler ran
    pub config: Option<Value>,
}

impl ObservedRun {
    pub fn out_dir(&self) -> Option<&str> {
        arg_after(&self.invocation.args, "--out-dir")
    }
}

fn arg_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

pub struct FakeProcessRunner {
    journal: Journal,
    script: Mutex<VecDeque<Scripted>>,
    runs: Mutex<Vec<ObservedRun>>,
}

impl FakeProcessRunner {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            script: Mutex::new(VecDeque::new()),
            runs: Mutex::new(Vec::new()),
        }
    }

    /// Outcomes for the next runs, in order. Unscripted runs exit with 0.
    pub fn script(&self, outcomes: impl IntoIterator<Item = Scripted>) {
        self.script.lock().unwrap().extend(outcomes);
    }

    pub fn runs(&self) -> Vec<ObservedRun> {
        self.runs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn run(&self, invocation: &Invocation, env: &BuildEnv) -> io::Result<ProcessExit> {
        let config_path = arg_after(&invocation.args, "--config-file")
            .map(PathBuf::from)
            .unwrap_or_else(|| invocation.cwd.join(".babelrc"));
        let config = std::fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok());

        let run = ObservedRun {
            invocation: invocation.clone(),
            env: env.clone(),
            config,
        };
        self.journal
            .push(format!("transpile {}", run.out_dir().unwrap_or("?")));
        self.runs.lock().unwrap().push(run);

        match self.script.lock().unwrap().pop_front() {
            None => Ok(ProcessExit::with_code(0)),
            Some(Scripted::Exit(code)) => Ok(ProcessExit::with_code(code)),
            Some(Scripted::SpawnError) => Err(io::Error::new(io::ErrorKind::NotFound, "no such program")),
            Some(Scripted::RemoveConfigAndExit(code)) => {
                std::fs::remove_file(&config_path)?;
                Ok(ProcessExit::with_code(code))
            }
        }
    }
}

pub struct RecordingCleaner {
    journal: Journal,
    fail: bool,
}

#[async_trait]
impl Cleaner for RecordingCleaner {
    async fn clean(&self, _project_root: &Path) -> anyhow::Result<()> {
        self.journal.push("clean");
        if self.fail {
            anyhow::bail!("permission denied");
        }
        Ok(())
    }
}

pub struct StaticConfigLoader {
    user: UserConfig,
    package: Option<PackageMeta>,
}

impl ConfigLoader for StaticConfigLoader {
    fn load_plugin_config(&self) -> modpack_config::Result<PluginConfig> {
        Ok(PluginConfig::default())
    }

    fn load_user_config(&self, _plugins: &PluginConfig) -> modpack_config::Result<UserConfig> {
        Ok(self.user.clone())
    }

    fn load_package(&self) -> modpack_config::Result<PackageMeta> {
        self.package
            .clone()
            .ok_or_else(|| ConfigError::PackageJsonNotFound(PathBuf::from(".")))
    }
}

pub struct RecordingBundler {
    journal: Journal,
    specs: Mutex<Vec<(BundleSpec, BuildEnv)>>,
    fail_on_call: Mutex<Option<usize>>,
}

impl RecordingBundler {
    pub fn specs(&self) -> Vec<BundleSpec> {
        self.specs.lock().unwrap().iter().map(|(s, _)| s.clone()).collect()
    }

    pub fn envs(&self) -> Vec<BuildEnv> {
        self.specs.lock().unwrap().iter().map(|(_, e)| e.clone()).collect()
    }

    /// Make the `n`th call (1-based) fail.
    pub fn fail_on_call(&self, n: usize) {
        *self.fail_on_call.lock().unwrap() = Some(n);
    }
}

#[async_trait]
impl Bundler for RecordingBundler {
    async fn bundle(&self, spec: &BundleSpec, env: &BuildEnv) -> anyhow::Result<BundleStats> {
        let call = {
            let mut specs = self.specs.lock().unwrap();
            specs.push((spec.clone(), env.clone()));
            specs.len()
        };
        self.journal
            .push(format!("bundle {}", spec.output.filename));

        if *self.fail_on_call.lock().unwrap() == Some(call) {
            anyhow::bail!("bundler crashed");
        }

        let size = if spec.plugins.terser { 400 } else { 1000 };
        Ok(BundleStats {
            assets: vec![AssetStats {
                name: spec.output.filename.clone(),
                path: spec.output_file(),
                size,
                gzip_size: None,
            }],
        })
    }
}

#[derive(Default)]
pub struct RecordingSizes {
    reports: Mutex<Vec<(BundleStats, Option<BundleStats>)>>,
}

impl RecordingSizes {
    pub fn reports(&self) -> Vec<(BundleStats, Option<BundleStats>)> {
        self.reports.lock().unwrap().clone()
    }
}

impl SizeReporter for RecordingSizes {
    fn report(&self, unminified: &BundleStats, minified: Option<&BundleStats>) {
        self.reports
            .lock()
            .unwrap()
            .push((unminified.clone(), minified.cloned()));
    }
}

#[derive(Default)]
pub struct RecordingStatus {
    journal: Journal,
}

struct RecordingHandle {
    journal: Journal,
    label: String,
}

impl RecordingStatus {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl StatusReporter for RecordingStatus {
    fn start(&self, label: &str) -> Box<dyn StatusHandle> {
        self.journal.push(format!("start {}", label));
        Box::new(RecordingHandle {
            journal: self.journal.clone(),
            label: label.to_string(),
        })
    }
}

impl StatusHandle for RecordingHandle {
    fn succeed(self: Box<Self>) {
        self.journal.push(format!("succeed {}", self.label));
    }

    fn fail(self: Box<Self>) {
        self.journal.push(format!("fail {}", self.label));
    }
}

/// A project directory plus a full set of recording collaborators.
pub struct Harness {
    pub dir: TempDir,
    pub journal: Journal,
    pub status_journal: Journal,
    pub processes: Arc<FakeProcessRunner>,
    pub bundler: Arc<RecordingBundler>,
    pub sizes: Arc<RecordingSizes>,
    pub status: Arc<RecordingStatus>,
    user: UserConfig,
    package: Option<PackageMeta>,
    clean_fails: bool,
}

impl Harness {
    pub fn new(user: Value) -> Self {
        let journal = Journal::default();
        let status_journal = Journal::default();
        Self {
            dir: TempDir::new().unwrap(),
            processes: Arc::new(FakeProcessRunner::new(journal.clone())),
            bundler: Arc::new(RecordingBundler {
                journal: journal.clone(),
                specs: Mutex::new(Vec::new()),
                fail_on_call: Mutex::new(None),
            }),
            sizes: Arc::new(RecordingSizes::default()),
            status: Arc::new(RecordingStatus::new(status_journal.clone())),
            journal,
            status_journal,
            user: serde_json::from_value(user).unwrap(),
            package: Some(PackageMeta::new("@acme/widgets", "1.2.0")),
            clean_fails: false,
        }
    }

    pub fn without_package(mut self) -> Self {
        self.package = None;
        self
    }

    pub fn with_package(mut self, package: PackageMeta) -> Self {
        self.package = Some(package);
        self
    }

    pub fn with_failing_clean(mut self) -> Self {
        self.clean_fails = true;
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn request(&self) -> BuildRequest {
        BuildRequest::new(self.root())
    }

    pub fn orchestrator(&self) -> BuildOrchestrator {
        BuildOrchestrator::new(Collaborators {
            cleaner: Arc::new(RecordingCleaner {
                journal: self.journal.clone(),
                fail: self.clean_fails,
            }),
            config: Arc::new(StaticConfigLoader {
                user: self.user.clone(),
                package: self.package.clone(),
            }),
            bundler: self.bundler.clone(),
            sizes: self.sizes.clone(),
            status: self.status.clone(),
            processes: self.processes.clone(),
        })
        .with_transpiler(TranspilerCommand::new("babel"))
    }
}

pub fn build_config() -> BuildConfig {
    BuildConfig::new(json!({"presets": ["env"], "comments": true}))
        .with_dev(json!({"compact": false}))
        .with_prod(json!({"comments": false}))
}

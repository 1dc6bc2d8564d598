//! Multi-target builds for publishable JavaScript libraries.
//!
//! A build produces up to three outputs from one `src/` tree:
//!
//! - `lib/`, a CommonJS build made by the external transpiler
//! - `es/`, an ES modules build made by the external transpiler
//! - `umd/`, a standalone bundle pair made by the external bundler
//!
//! [`BuildOrchestrator`] plans the steps from the [`UserConfig`] and runs
//! them one at a time, stopping at the first failure. Everything outside
//! the orchestration itself (cleaning, config loading, bundling, progress
//! and size output) is reached through the traits in [`collaborators`].
//!
//! [`UserConfig`]: modpack_config::UserConfig

pub mod bundle;
pub mod collaborators;
pub mod env;
pub mod error;
pub mod orchestrator;
pub mod process;
pub mod sequencer;
pub mod temp_config;
pub mod transpile;

pub use bundle::{
    AssetStats, BundleBuilder, BundleOutput, BundlePass, BundlePlugins, BundleSpec, BundleStats,
    ExternalSpec, create_externals,
};
pub use collaborators::{
    Bundler, Cleaner, ConfigLoader, SizeReporter, StatusHandle, StatusReporter, TracingStatus,
};
pub use env::BuildEnv;
pub use error::{BuildError, Result};
pub use orchestrator::{
    BuildOrchestrator, BuildRequest, BuildStep, Collaborators, ModuleTarget, plan,
};
pub use process::{Invocation, NativeProcessRunner, ProcessExit, ProcessRunner};
pub use sequencer::{Task, run_series, run_tasks};
pub use temp_config::{ConfigFileName, TempConfigFile};
pub use transpile::{TranspileOptions, TranspileRunner, TranspilerCommand};

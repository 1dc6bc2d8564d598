//! Configuration for modpack builds.
//!
//! - [`BuildConfig`] holds the layered transpile fragments (`base`, `dev`,
//!   `prod`) and derives the per-target configurations with [`compose`].
//! - [`UserConfig`] says which outputs are enabled and how they are shaped.
//! - [`ConfigDiscovery`] finds and loads `modpack.toml` for CLI use.

pub mod build;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod package;
pub mod plugin;
pub mod project;
pub mod user;
pub mod validation;

pub use build::BuildConfig;
pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery, ConfigSource};
pub use error::{ConfigError, Result};
pub use merge::{compose, merge_values};
pub use package::{PackageMeta, format_package_name};
pub use plugin::{PluginConfig, PluginOptions};
pub use project::{BundlerSettings, ProjectConfig};
pub use user::{NpmConfig, UmdConfig, UmdSetting, UserConfig};
pub use validation::validate_global_name;

//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{BuildError, CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match hint_for(&err) {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

/// A suggestion for errors the user can usually fix themselves.
pub fn hint_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Build(BuildError::TranspileProcess { .. }) => Some(
            "The transpiler output above shows what went wrong. Make sure @babel/cli is installed in the project",
        ),
        CliError::Build(BuildError::ConfigWrite { .. }) => {
            Some("Check that the project directory is writable")
        }
        CliError::Build(BuildError::ConfigCleanup { .. }) => {
            Some("Remove the leftover temporary config by hand before the next build")
        }
        CliError::Build(BuildError::BundleBuild { .. }) => {
            Some("Check the bundler.command setting in modpack.toml and that the bundler is installed")
        }
        CliError::Build(BuildError::Config(err)) | CliError::Config(err) => config_hint(err),
        _ => None,
    }
}

fn config_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NotFound(_) => Some("Create a modpack.toml file or pass --config <path>"),
        ConfigError::PackageJsonNotFound(_) => {
            Some("UMD builds need a package.json with a name; run modpack from the package root or pass --cwd")
        }
        _ => None,
    }
}

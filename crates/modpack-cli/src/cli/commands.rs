use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_extensions;

/// Available modpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the library
    ///
    /// Removes lib/, es/ and umd/, then runs every enabled target one after
    /// another. The first failing target stops the build.
    Build(BuildArgs),

    /// Remove previous build output
    Clean(CleanArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Entry module for the UMD bundle
    ///
    /// Overrides `npm.umd.entry`; defaults to src/index.js.
    #[arg(value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Copy files the transpiler does not process into the output
    #[arg(long)]
    pub copy_files: bool,

    /// Comma-separated file extensions to transpile
    ///
    /// Example: --extensions .js,.jsx,.ts
    #[arg(short = 'x', long, value_name = "LIST", value_parser = parse_extensions)]
    pub extensions: Option<String>,

    /// Use a specific config file instead of modpack.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated plugin names to enable in addition to the config file
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub plugins: Vec<String>,

    /// Project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the clean command
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

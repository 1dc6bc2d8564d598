//! Command-line interface definition for modpack.
//!
//! - `modpack build` - clean, then build `lib/`, `es/` and `umd/`
//! - `modpack clean` - remove previous build output

mod commands;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CleanArgs, Command};
pub use validation::parse_extensions;

/// modpack - build publishable JavaScript libraries
#[derive(Parser, Debug)]
#[command(
    name = "modpack",
    version,
    about = "Build CommonJS, ES module and UMD outputs for a JavaScript library",
    long_about = "modpack transpiles src/ into lib/ (CommonJS) and es/ (ES modules) and can\n\
                  bundle a standalone UMD build into umd/, driven by modpack.toml."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows the composed transpile configs, the commands being run and
    /// each build step as it starts.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

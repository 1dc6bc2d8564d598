//! modpack CLI entry point.

use clap::Parser;
use miette::Result;
use modpack_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let colors = !args.no_color && logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, !colors);
    ui::init_colors(colors);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args, args.quiet).await,
        cli::Command::Clean(clean_args) => commands::clean_execute(clean_args, args.quiet).await,
    };

    result.map_err(error::cli_error_to_miette)
}

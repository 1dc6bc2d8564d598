//! Logging setup for the modpack CLI.
//!
//! The library crates only emit `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for the modpack crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the modpack crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "modpack_cli=debug,modpack_build=debug,modpack_config=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "modpack_cli=info,modpack_build=info,modpack_config=info";

/// Build the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before anything logs.
///
/// # Example
///
/// ```rust,no_run
/// use modpack_cli::logger::init_logger;
///
/// init_logger(false, false, !modpack_cli::logger::should_use_colors());
/// tracing::info!("Starting build");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

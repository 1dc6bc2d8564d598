//! Terminal output: spinners, status lines and size reports.
//!
//! Spinners are only drawn when stderr is an attended terminal outside CI;
//! otherwise the same events are printed as plain lines.

mod format;
mod messages;
mod sizes;
mod spinner;
mod status;

pub use format::{format_duration, format_reduction, format_size};
pub use messages::{error, info, success};
pub use sizes::TerminalSizeReporter;
pub use spinner::Spinner;
pub use status::TerminalStatus;

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Whether animated progress should be drawn.
pub fn is_interactive() -> bool {
    !is_ci() && console::user_attended_stderr()
}

/// Apply the color choice to everything printed through `owo-colors` and
/// `console`.
pub fn init_colors(enabled: bool) {
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
}

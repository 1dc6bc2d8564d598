use modpack_build::{StatusHandle, StatusReporter};

use super::{Spinner, messages};

/// Progress for build steps: a spinner on a terminal, plain lines otherwise.
#[derive(Debug, Clone, Copy)]
pub struct TerminalStatus {
    interactive: bool,
    quiet: bool,
}

impl TerminalStatus {
    pub fn new(quiet: bool) -> Self {
        Self {
            interactive: super::is_interactive(),
            quiet,
        }
    }

    /// Never draw spinners.
    pub fn plain(quiet: bool) -> Self {
        Self {
            interactive: false,
            quiet,
        }
    }
}

enum Handle {
    Spinner { spinner: Spinner, label: String },
    Plain { label: String, quiet: bool },
}

impl StatusReporter for TerminalStatus {
    fn start(&self, label: &str) -> Box<dyn StatusHandle> {
        if self.interactive && !self.quiet {
            return Box::new(Handle::Spinner {
                spinner: Spinner::new(label),
                label: label.to_string(),
            });
        }

        if !self.quiet {
            messages::info(label);
        }
        Box::new(Handle::Plain {
            label: label.to_string(),
            quiet: self.quiet,
        })
    }
}

impl StatusHandle for Handle {
    fn succeed(self: Box<Self>) {
        match *self {
            Handle::Spinner { spinner, label } => spinner.finish(&label),
            Handle::Plain { label, quiet } => {
                if !quiet {
                    messages::success(&label);
                }
            }
        }
    }

    fn fail(self: Box<Self>) {
        match *self {
            Handle::Spinner { spinner, label } => spinner.fail(&label),
            Handle::Plain { label, .. } => messages::error(&label),
        }
    }
}

//! The build environment marker.
//!
//! One value is created per build and passed to every step. Child processes
//! see it as `NODE_ENV`; the parent process environment is left alone.

use std::fmt;

/// Variable name the transpiler and bundler read the marker from.
pub const ENV_VAR: &str = "NODE_ENV";

pub const PRODUCTION: &str = "production";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    mode: String,
}

impl BuildEnv {
    pub fn new(mode: impl Into<String>) -> Self {
        Self { mode: mode.into() }
    }

    pub fn production() -> Self {
        Self::new(PRODUCTION)
    }

    /// Keep a marker the caller already set, otherwise default to production.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            Some(mode) if !mode.is_empty() => Self::new(mode),
            _ => Self::production(),
        }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn is_production(&self) -> bool {
        self.mode == PRODUCTION
    }

    /// Environment entries to hand to a child process.
    pub fn vars(&self) -> [(&'static str, &str); 1] {
        [(ENV_VAR, self.mode.as_str())]
    }
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for BuildEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mode)
    }
}

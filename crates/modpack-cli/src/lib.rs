//! modpack CLI - build publishable JavaScript libraries.
//!
//! This crate provides the `modpack` binary on top of `modpack-build`:
//!
//! - [`cli`] - argument parsing
//! - [`commands`] - `build` and `clean`
//! - [`config`] - loading `modpack.toml` for a build
//! - [`bundler`] - the external UMD bundler command
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - spinners, status lines and size reports

pub mod bundler;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

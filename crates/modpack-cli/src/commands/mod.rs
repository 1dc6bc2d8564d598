//! Command implementations for the modpack CLI.
//!
//! - [`build`] - clean, transpile and bundle
//! - [`clean`] - remove previous build output

pub mod build;
pub mod clean;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use clean::execute as clean_execute;

//! Library exports for getrel-cli.
//!
//! This module exports the CLI structure for use by tests and tooling.

pub mod cli;
pub mod error;

pub use cli::Cli;

//! CLI structure and argument definitions.
//!
//! This module defines the CLI using clap's derive macros. Every option can
//! also be supplied through a `GETREL_*` environment variable.

use crate::error::CliError;
use clap::Parser;
use getrel::{CaseSensitivity, Logger, RelativeOptions};
use std::ffi::OsString;
use std::path::PathBuf;

/// Print a path relative to the current working directory or another path.
#[derive(Parser, Debug)]
#[command(name = "get-relative-path")]
#[command(
    version,
    about = "Given a path, print it relative to the current working directory (or a specified path)",
    long_about = None
)]
pub struct Cli {
    /// Path to express relatively
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Path to use as the root of the relative path (default: current directory)
    #[arg(long, value_name = "PATH", env = "GETREL_RELATIVE_TO")]
    pub relative_to: Option<OsString>,

    /// Compare path segments case-sensitively, or guess from the filesystem
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        ignore_case = true,
        default_value_t = CaseSensitivity::Guess,
        env = "GETREL_CASE_SENSITIVE"
    )]
    pub case_sensitive: CaseSensitivity,

    /// Prefix results that begin with a directory name with ./
    #[arg(long, env = "GETREL_ALWAYS_START_WITH_DOT")]
    pub always_start_with_dot: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Build library options from the parsed arguments.
    ///
    /// An empty `--relative-to` means the working directory, like omitting it.
    pub fn to_options(&self) -> Result<RelativeOptions, CliError> {
        if self.path.is_empty() {
            return Err(CliError::InvalidArguments(
                "PATH must not be empty".to_string(),
            ));
        }

        let relative_to = self
            .relative_to
            .clone()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(RelativeOptions::new(&self.path)
            .with_relative_to(relative_to)
            .with_case_sensitivity(self.case_sensitive)
            .with_always_start_with_dot(self.always_start_with_dot))
    }

    /// Compute the relative path the arguments ask for.
    pub fn execute(&self, logger: &Logger) -> Result<PathBuf, CliError> {
        let options = self.to_options()?;

        match &options.relative_to {
            Some(base) => logger.info(&format!("relative to {}", base.display())),
            None => logger.info("relative to the working directory"),
        }
        logger.info(&format!("case sensitivity: {}", options.case_sensitivity));

        getrel::relative_path(&options, getrel::guess).map_err(CliError::from)
    }
}

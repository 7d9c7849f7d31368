//! Logging infrastructure for the getrel library.
//!
//! The library emits diagnostics through the `log` facade. This module
//! provides the stderr backend the CLI installs, with three verbosity levels.
//! Standard output is reserved for the computed path, so nothing here ever
//! writes to it.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "GETREL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use getrel::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Recognizes "quiet", "normal" and "verbose", ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl LogLevel {
    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr logger.
///
/// Messages below the configured level are dropped. The logger can be used
/// directly, or installed as the `log` backend with [`Logger::install`].
///
/// # Examples
///
/// ```
/// use getrel::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.info("not printed at normal level");
///
/// let logger = Logger::new(LogLevel::Verbose);
/// logger.info("printed at verbose level");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Installs a copy of this logger as the global `log` backend.
    ///
    /// Library diagnostics (such as the case-sensitivity guesser's decisions)
    /// go through `log`, so they only appear once a backend is installed.
    /// Installing twice is harmless; the first backend stays in place.
    pub fn install(&self) {
        if log::set_boxed_logger(Box::new(*self)).is_ok() {
            log::set_max_level(self.level.filter());
        }
    }

    fn emit(&self, level: Level, message: &str) {
        if level <= self.level.filter() {
            eprintln!("{}: {message}", level.as_str());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Chooses the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. The `GETREL_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// An unparsable `GETREL_LOG_MODE` is ignored.
///
/// # Examples
///
/// ```
/// use getrel::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .map_or_else(Logger::default, Logger::new)
}

//! Error types for the getrel library.
//!
//! Only failures of path resolution surface as errors. Probe failures seen
//! while guessing case sensitivity are not errors; they make a path
//! inconclusive and it is skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a getrel error.
///
/// # Examples
///
/// ```
/// use getrel::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("..")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the getrel library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No relative path leads from the base to the target.
    #[error("can't make {} relative to {}", target.display(), base.display())]
    NoRelativePath {
        /// The path that was to be made relative.
        target: PathBuf,
        /// The path it was to be made relative to.
        base: PathBuf,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

//! Path normalization.
//!
//! Relative paths are computed lexically, so both inputs are first brought
//! into absolute, clean form:
//!
//! - Relative paths are joined onto the working directory
//! - `.` components are dropped and `..` components are resolved
//! - Trailing separators disappear
//!
//! Symlinks are never followed here. `/home/me/link/..` normalizes to
//! `/home/me` regardless of where `link` points, matching how shells treat
//! `cd ..`.
//!
//! # Examples
//!
//! ```
//! use getrel::path::normalize::absolutize;
//! use std::path::{Path, PathBuf};
//!
//! let cwd = Path::new("/Users/faekiva");
//! assert_eq!(absolutize(Path::new("code/../notes/"), cwd), PathBuf::from("/Users/faekiva/notes"));
//! ```

pub mod normalize;

pub use normalize::{absolutize, resolve_components, working_directory};

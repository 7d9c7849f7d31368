#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # getrel
//!
//! A library for computing a filesystem path relative to another path.
//!
//! Path segments are compared either case-sensitively or case-insensitively.
//! The policy can be forced, or guessed from how the filesystem holding the
//! paths actually resolves differently-cased spellings.
//!
//! ## Core Types
//!
//! - [`CaseSensitivity`]: Forced or guessed case-sensitivity policy
//! - [`Probe`] and [`SystemProbe`]: Filesystem identity lookups
//! - [`RelativeOptions`]: Input to [`relative_path`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use getrel::{relative_path, CaseSensitivity, RelativeOptions};
//!
//! let options = RelativeOptions::new("/Users/faekiva")
//!     .with_relative_to(Some("/users".into()))
//!     .with_case_sensitivity(CaseSensitivity::False);
//!
//! let relative = relative_path(&options, getrel::guess).unwrap();
//! assert_eq!(relative, std::path::PathBuf::from("faekiva"));
//! ```

pub mod case;
pub mod error;
pub mod logging;
pub mod path;
pub mod probe;
pub mod relative;

// Re-export key types at crate root for convenience
pub use case::{guess, guess_with, os_default, CaseSensitivity};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use probe::{FileIdentity, Probe, SystemProbe};
pub use relative::{relative_path, RelativeOptions};

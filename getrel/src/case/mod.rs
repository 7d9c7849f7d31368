//! Case-sensitivity policy and detection.
//!
//! Whether `/Users` and `/users` name the same directory depends on the
//! filesystem, not just the operating system: a Linux box can mount an SMB
//! share, and a Mac can format a volume as case-sensitive APFS. So instead of
//! trusting the OS, the guesser asks the filesystem.
//!
//! # Guessing
//!
//! For each candidate path, a differently-cased spelling is derived and both
//! spellings are probed:
//!
//! - both fail: the path tells us nothing and is skipped
//! - one fails: the spellings are distinct, so the filesystem is sensitive
//! - both reach the same object: insensitive
//! - both reach different objects: sensitive
//!
//! A single sensitive path settles the question. When no path yields an
//! answer, the operating system's usual default is used (see
//! [`os_default`]).
//!
//! # Examples
//!
//! ```
//! use getrel::case::guess_with;
//! use std::io;
//!
//! // A fake filesystem where every spelling names the same object.
//! let probe = |_: &str| -> io::Result<u32> { Ok(3) };
//!
//! assert!(!guess_with("linux", &probe, &["/Users/faekiva"]));
//! // With nothing to look at, fall back to the OS default.
//! assert!(guess_with("linux", &probe, &[]));
//! assert!(!guess_with("macos", &probe, &[]));
//! ```

pub mod fallback;
pub mod guess;
pub mod variant;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

pub use fallback::os_default;
pub use guess::{guess, guess_with, PathVerdict};
pub use variant::differently_cased;

/// Case-sensitivity policy for comparing path segments.
///
/// # Examples
///
/// ```
/// use getrel::CaseSensitivity;
///
/// let policy: CaseSensitivity = "guess".parse().unwrap();
/// assert_eq!(policy, CaseSensitivity::Guess);
/// assert_eq!(CaseSensitivity::True.forced(), Some(true));
/// assert_eq!(CaseSensitivity::Guess.forced(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum CaseSensitivity {
    /// Always compare segments case-sensitively.
    True,
    /// Always compare segments case-insensitively.
    False,
    /// Ask the filesystem holding the paths.
    #[default]
    Guess,
}

impl CaseSensitivity {
    /// The forced verdict, or `None` when the policy is to guess.
    #[must_use]
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Guess => None,
        }
    }
}

impl From<bool> for CaseSensitivity {
    fn from(sensitive: bool) -> Self {
        if sensitive {
            Self::True
        } else {
            Self::False
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Guess => write!(f, "guess"),
        }
    }
}

impl FromStr for CaseSensitivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "guess" => Ok(Self::Guess),
            _ => Err(format!(
                "invalid case sensitivity '{s}': expected true, false or guess"
            )),
        }
    }
}

//! Relative path computation.
//!
//! This module ties the pieces together: it settles the case-sensitivity
//! policy, normalizes both paths, and asks `pathdiff` for the relative path.

use std::path::{Component, Path, PathBuf};

use crate::case::CaseSensitivity;
use crate::error::{Error, Result};
use crate::path::normalize::{absolutize, resolve_components, working_directory};

/// Options for a relative path computation.
///
/// # Examples
///
/// ```
/// use getrel::{CaseSensitivity, RelativeOptions};
///
/// let options = RelativeOptions::new("/Users/faekiva")
///     .with_relative_to(Some("/Users".into()))
///     .with_always_start_with_dot(true);
/// assert_eq!(options.case_sensitivity, CaseSensitivity::Guess);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeOptions {
    /// The path to express relatively.
    pub target: PathBuf,

    /// The path to express it relative to. `None` means the working
    /// directory.
    pub relative_to: Option<PathBuf>,

    /// Whether segments are compared case-sensitively.
    pub case_sensitivity: CaseSensitivity,

    /// Prefix results that begin with a plain segment with `./`.
    pub always_start_with_dot: bool,
}

impl RelativeOptions {
    /// Creates options for `target`, relative to the working directory, with
    /// guessed case sensitivity and no leading dot.
    #[must_use]
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            relative_to: None,
            case_sensitivity: CaseSensitivity::default(),
            always_start_with_dot: false,
        }
    }

    /// Sets the path to compute relative to.
    #[must_use]
    pub fn with_relative_to(mut self, relative_to: Option<PathBuf>) -> Self {
        self.relative_to = relative_to;
        self
    }

    /// Sets the case-sensitivity policy.
    #[must_use]
    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Sets whether results always start with `.`.
    #[must_use]
    pub fn with_always_start_with_dot(mut self, always_start_with_dot: bool) -> Self {
        self.always_start_with_dot = always_start_with_dot;
        self
    }
}

/// Computes `options.target` relative to `options.relative_to`.
///
/// When the policy is [`CaseSensitivity::Guess`], `guesser` is called once
/// with the two paths as given (the target first); it is not called when the
/// policy is forced. Under a case-insensitive verdict both paths are
/// lower-cased after being made absolute, so the result is lower-case too.
///
/// # Errors
///
/// Returns an error if:
/// - Either path is not valid UTF-8 (`InvalidPath`)
/// - A relative path is given and the working directory is unavailable
/// - The paths have different roots, e.g. different drives (`NoRelativePath`)
///
/// # Examples
///
/// ```
/// use getrel::{relative_path, CaseSensitivity, RelativeOptions};
/// use std::path::PathBuf;
///
/// let options = RelativeOptions::new("/Users/faekiva")
///     .with_relative_to(Some("/Users".into()))
///     .with_case_sensitivity(CaseSensitivity::True);
/// assert_eq!(relative_path(&options, getrel::guess).unwrap(), PathBuf::from("faekiva"));
/// ```
pub fn relative_path<G>(options: &RelativeOptions, guesser: G) -> Result<PathBuf>
where
    G: FnOnce(&[&str]) -> bool,
{
    relative_path_from(options, guesser, working_directory)
}

/// [`relative_path`] with the working directory supplied by `cwd`, which is
/// called at most once and only when an input is relative.
fn relative_path_from<G, W>(options: &RelativeOptions, guesser: G, cwd: W) -> Result<PathBuf>
where
    G: FnOnce(&[&str]) -> bool,
    W: FnOnce() -> Result<PathBuf>,
{
    let target = &options.target;
    let (base, cwd) = match &options.relative_to {
        Some(base) if base.is_absolute() && target.is_absolute() => (base.clone(), None),
        Some(base) => (base.clone(), Some(cwd()?)),
        None => {
            let cwd = cwd()?;
            (cwd.clone(), Some(cwd))
        }
    };

    let sensitive = match options.case_sensitivity.forced() {
        Some(forced) => forced,
        None => guesser(&[to_utf8(target)?, to_utf8(&base)?]),
    };
    log::debug!("comparing path segments case-sensitively: {sensitive}");

    let (mut target, mut base) = match &cwd {
        Some(cwd) => (absolutize(target, cwd), absolutize(&base, cwd)),
        None => (resolve_components(target), resolve_components(&base)),
    };

    if !sensitive {
        target = lowercase(&target)?;
        base = lowercase(&base)?;
    }

    let relative = diff(&target, &base)?;
    if options.always_start_with_dot {
        Ok(with_leading_dot(relative))
    } else {
        Ok(relative)
    }
}

/// Relative path from `base` to `target`; both must be absolute and clean.
fn diff(target: &Path, base: &Path) -> Result<PathBuf> {
    let no_relative_path = || Error::NoRelativePath {
        target: target.to_path_buf(),
        base: base.to_path_buf(),
    };

    if target.components().next() != base.components().next() {
        return Err(no_relative_path());
    }

    let relative = pathdiff::diff_paths(target, base).ok_or_else(no_relative_path)?;
    if relative.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(relative)
    }
}

fn with_leading_dot(relative: PathBuf) -> PathBuf {
    match relative.components().next() {
        Some(Component::Normal(_)) => Path::new(".").join(relative),
        _ => relative,
    }
}

fn lowercase(path: &Path) -> Result<PathBuf> {
    Ok(PathBuf::from(to_utf8(path)?.to_lowercase()))
}

fn to_utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })
}

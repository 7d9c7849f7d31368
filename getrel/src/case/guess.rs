//! Guessing case sensitivity from filesystem behavior.

use std::env;

use crate::case::fallback::os_default;
use crate::case::variant::differently_cased;
use crate::probe::{Probe, SystemProbe};

/// What probing one path revealed about case sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathVerdict {
    /// The two spellings are distinct.
    Sensitive,
    /// The two spellings reach the same object.
    Insensitive,
    /// Neither spelling resolves.
    Inconclusive,
}

/// Probes `path` and its alternate spelling `variant` and classifies the
/// outcome.
///
/// If the filesystem ignored case, both spellings would resolve the same
/// way, so a lookup that succeeds for one spelling and fails for the other
/// proves sensitivity just like two different identities do.
pub fn classify<P: Probe>(probe: &P, path: &str, variant: &str) -> PathVerdict {
    match (probe.identify(variant), probe.identify(path)) {
        (Err(err), Err(_)) => {
            log::debug!("neither {path:?} nor {variant:?} resolves: {err}");
            PathVerdict::Inconclusive
        }
        (Ok(_), Err(_)) | (Err(_), Ok(_)) => PathVerdict::Sensitive,
        (Ok(a), Ok(b)) if a == b => PathVerdict::Insensitive,
        (Ok(_), Ok(_)) => PathVerdict::Sensitive,
    }
}

/// Guesses whether the filesystem holding `paths` is case-sensitive, using
/// the real filesystem and the current operating system's default.
///
/// # Examples
///
/// ```
/// // Nothing to probe: the answer is the OS default.
/// assert_eq!(getrel::guess(&[]), getrel::os_default(std::env::consts::OS));
/// ```
#[must_use]
pub fn guess(paths: &[&str]) -> bool {
    guess_with(env::consts::OS, &SystemProbe, paths)
}

/// Guesses whether the filesystem holding `paths` is case-sensitive.
///
/// Paths are tried in order. The first path proving sensitivity ends the
/// scan with `true`. Paths without cased letters and paths that do not
/// resolve in either spelling are skipped. If at least one path was
/// conclusive and none proved sensitivity, the answer is `false`; if none
/// was conclusive (or `paths` is empty) it is [`os_default`] for `os`.
///
/// The probe is not consulted when `paths` is empty.
#[must_use]
pub fn guess_with<P: Probe>(os: &str, probe: &P, paths: &[&str]) -> bool {
    let mut any_reported = false;

    for path in paths {
        let Some(variant) = differently_cased(path) else {
            log::debug!("skipping {path:?}: no letters to change case of");
            continue;
        };

        match classify(probe, path, &variant) {
            PathVerdict::Sensitive => {
                log::debug!("{path:?} and {variant:?} are distinct: case-sensitive");
                return true;
            }
            PathVerdict::Insensitive => {
                log::debug!("{path:?} and {variant:?} are the same entry");
                any_reported = true;
            }
            PathVerdict::Inconclusive => {}
        }
    }

    if any_reported {
        return false;
    }

    let fallback = os_default(os);
    log::debug!("no conclusive path, using {os} default: case-sensitive={fallback}");
    fallback
}

//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Determining the working directory the way a shell reports it
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components lexically

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::probe::stat_identity;

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` directly under the root stays at the root, as it does on a real
/// filesystem. Leading `..` components of a relative path are kept.
///
/// # Examples
///
/// ```
/// use getrel::path::normalize::resolve_components;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_components("/a/./b/../c".as_ref()), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components("/a/../..".as_ref()), PathBuf::from("/"));
/// assert_eq!(resolve_components("../a/./b/..".as_ref()), PathBuf::from("../a"));
/// assert_eq!(resolve_components("a/..".as_ref()), PathBuf::from("."));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut stack: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                stack.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                // Can't go above the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    stack.push(component);
                }
            },
        }
    }

    if stack.is_empty() {
        return PathBuf::from(".");
    }
    stack.iter().collect()
}

/// Return the current working directory, preferring `$PWD`.
///
/// A shell keeps `$PWD` spelled the way the user reached the directory,
/// including through symlinks, whereas the OS reports the resolved path.
/// `$PWD` is used when it is absolute and names the same object as `.`;
/// otherwise the OS answer is returned.
///
/// # Errors
///
/// Returns `Error::WorkingDirectory` if the OS cannot report the current
/// directory and `$PWD` is not usable.
pub fn working_directory() -> Result<PathBuf> {
    if let Some(pwd) = env::var_os("PWD").map(PathBuf::from) {
        if pwd.is_absolute() {
            if let (Ok(a), Ok(b)) = (stat_identity(&pwd), stat_identity(Path::new("."))) {
                if a == b {
                    return Ok(pwd);
                }
            }
        }
    }

    env::current_dir().map_err(Error::WorkingDirectory)
}

/// Make `path` absolute against `cwd` and resolve `.` and `..`.
///
/// # Examples
///
/// ```
/// use getrel::path::normalize::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let cwd = Path::new("/home/user/project");
/// assert_eq!(absolutize(Path::new("../other"), cwd), PathBuf::from("/home/user/other"));
/// assert_eq!(absolutize(Path::new("/etc/./hosts"), cwd), PathBuf::from("/etc/hosts"));
/// ```
#[must_use]
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&cwd.join(path))
    }
}

//! Filesystem identity probing.
//!
//! A probe answers one question about a path: which filesystem object does
//! it name? Two probe results that compare equal mean the two spellings
//! reach the same object. The case-sensitivity guesser only ever talks to
//! the filesystem through a [`Probe`], so tests can swap in a fake.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Identity of a filesystem object, comparable across separate lookups.
///
/// On Unix this is the device and inode number of the object. Elsewhere it
/// is the fully resolved path, which spells the object the way it is stored
/// on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileIdentity {
    /// Device and inode pair.
    Inode {
        /// Device the object lives on.
        device: u64,
        /// Inode number on that device.
        inode: u64,
    },
    /// Canonical path of the object.
    Canonical(PathBuf),
}

/// Looks up the identity of the object a path names.
///
/// Any closure `Fn(&str) -> io::Result<T>` with a comparable `T` is a probe.
///
/// # Examples
///
/// ```
/// use getrel::Probe;
/// use std::io;
///
/// // Every spelling names the same object.
/// let probe = |_: &str| -> io::Result<u32> { Ok(3) };
/// assert_eq!(probe.identify("/Users").unwrap(), probe.identify("/users").unwrap());
/// ```
pub trait Probe {
    /// Identity token returned for a path.
    type Identity: PartialEq;

    /// Returns the identity of the object `path` names.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not resolve to any object.
    fn identify(&self, path: &str) -> io::Result<Self::Identity>;
}

impl<F, T> Probe for F
where
    F: Fn(&str) -> io::Result<T>,
    T: PartialEq,
{
    type Identity = T;

    fn identify(&self, path: &str) -> io::Result<T> {
        self(path)
    }
}

/// Probe backed by the real filesystem, one metadata query per lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    type Identity = FileIdentity;

    fn identify(&self, path: &str) -> io::Result<FileIdentity> {
        stat_identity(Path::new(path))
    }
}

/// Returns the identity of the object `path` names, following symlinks.
///
/// # Errors
///
/// Returns the underlying I/O error if the path cannot be resolved.
#[cfg(unix)]
pub fn stat_identity(path: &Path) -> io::Result<FileIdentity> {
    use std::os::unix::fs::MetadataExt;

    let metadata = fs::metadata(path)?;
    Ok(FileIdentity::Inode {
        device: metadata.dev(),
        inode: metadata.ino(),
    })
}

/// Returns the identity of the object `path` names, following symlinks.
///
/// # Errors
///
/// Returns the underlying I/O error if the path cannot be resolved.
#[cfg(not(unix))]
pub fn stat_identity(path: &Path) -> io::Result<FileIdentity> {
    fs::canonicalize(path).map(FileIdentity::Canonical)
}

//! Per-OS case-sensitivity defaults.

/// Returns the case-sensitivity to assume on `os` when the filesystem gives
/// no usable answer.
///
/// `os` uses the identifiers of [`std::env::consts::OS`]; `"darwin"` is
/// accepted as an alias for `"macos"`. macOS and Windows default to
/// case-insensitive volumes. Everything else, including identifiers this
/// function does not know, is treated as case-sensitive: where the answer is
/// "sometimes, depending on configuration", a sensitive comparison yields a
/// longer but still correct relative path.
///
/// # Examples
///
/// ```
/// use getrel::os_default;
///
/// assert!(!os_default("macos"));
/// assert!(!os_default("windows"));
/// assert!(os_default("linux"));
/// assert!(os_default("plan9"));
/// ```
#[must_use]
pub fn os_default(os: &str) -> bool {
    !matches!(os, "macos" | "darwin" | "windows")
}

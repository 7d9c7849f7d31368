//! Alternate-case spellings of paths.

/// Returns a spelling of `path` that differs only in letter case.
///
/// The all-lowercase spelling is preferred; the all-uppercase one is used
/// when the path is already lowercase. Returns `None` when neither differs,
/// i.e. the path has no cased letters and so cannot reveal anything about
/// case sensitivity.
///
/// Characters are mapped one to one. A character whose case mapping expands
/// to several characters (`ß` upper-cases to `SS`) is kept as is, since the
/// expanded spelling is a different name rather than the same name in
/// another case.
///
/// # Examples
///
/// ```
/// use getrel::case::differently_cased;
///
/// assert_eq!(differently_cased("/Users/faekiva").as_deref(), Some("/users/faekiva"));
/// assert_eq!(differently_cased("/users/faekiva").as_deref(), Some("/USERS/FAEKIVA"));
/// assert_eq!(differently_cased("/2/12345"), None);
/// ```
#[must_use]
pub fn differently_cased(path: &str) -> Option<String> {
    let lower: String = path
        .chars()
        .map(|c| single(c.to_lowercase()).unwrap_or(c))
        .collect();
    if lower != path {
        return Some(lower);
    }

    let upper: String = path
        .chars()
        .map(|c| single(c.to_uppercase()).unwrap_or(c))
        .collect();
    if upper != path {
        return Some(upper);
    }

    None
}

/// The only character of `mapping`, or `None` if it has zero or several.
fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        Some(_) => None,
        None => Some(first),
    }
}

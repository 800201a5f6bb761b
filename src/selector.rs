//! Splitting a path reference into selector and remainder.
//!
//! A path reference looks like `<selector><delimiter><remainder>`, for example
//! `mem://notes/today.txt`. Only the first delimiter splits; anything after it
//! belongs to the remainder verbatim. A path without the delimiter has the
//! empty selector and is its own remainder.

use std::ffi::OsStr;
use std::path::Path;

/// Delimiter used by [`SelectFs::new`](crate::SelectFs::new).
pub const DEFAULT_DELIMITER: &str = "://";

/// Split `name` at the first occurrence of `delimiter`.
///
/// Returns `(selector, remainder)`. If the delimiter does not occur, the
/// selector is empty and the remainder is the whole input. An empty delimiter
/// never produces a selector.
///
/// # Examples
///
/// ```rust
/// use selectfs::{split_selector, DEFAULT_DELIMITER};
///
/// assert_eq!(split_selector("a://f.txt", DEFAULT_DELIMITER), ("a", "f.txt"));
/// assert_eq!(split_selector("a://b://c", DEFAULT_DELIMITER), ("a", "b://c"));
/// assert_eq!(split_selector("/plain/path", DEFAULT_DELIMITER), ("", "/plain/path"));
/// ```
pub fn split_selector<'a>(name: &'a str, delimiter: &str) -> (&'a str, &'a str) {
    if delimiter.is_empty() {
        return ("", name);
    }
    name.split_once(delimiter).unwrap_or(("", name))
}

/// [`split_selector`] for OS paths.
///
/// UTF-8 paths go through [`split_selector`]. On Unix, other paths are split
/// on their raw bytes so the remainder reaches the backend unchanged;
/// elsewhere they can only carry the empty selector.
pub(crate) fn split_path<'a>(path: &'a Path, delimiter: &str) -> (&'a OsStr, &'a Path) {
    match path.to_str() {
        Some(name) => {
            let (selector, remainder) = split_selector(name, delimiter);
            (OsStr::new(selector), Path::new(remainder))
        }
        None => split_raw(path, delimiter),
    }
}

#[cfg(unix)]
fn split_raw<'a>(path: &'a Path, delimiter: &str) -> (&'a OsStr, &'a Path) {
    use std::os::unix::ffi::OsStrExt;

    let bytes = path.as_os_str().as_bytes();
    let delim = delimiter.as_bytes();
    if delim.is_empty() {
        return (OsStr::new(""), path);
    }
    match bytes.windows(delim.len()).position(|w| w == delim) {
        Some(at) => (
            OsStr::from_bytes(&bytes[..at]),
            Path::new(OsStr::from_bytes(&bytes[at + delim.len()..])),
        ),
        None => (OsStr::new(""), path),
    }
}

#[cfg(not(unix))]
fn split_raw<'a>(path: &'a Path, _delimiter: &str) -> (&'a OsStr, &'a Path) {
    (OsStr::new(""), path)
}

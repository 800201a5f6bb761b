//! # Selecting Filesystem
//!
//! [`SelectFs`] routes every operation to one of several backends, picked by
//! the selector prefix of the path.
//!
//! ```text
//! "mem://notes.txt" ──split──▶ ("mem", "notes.txt") ──lookup──▶ backends["mem"].op("notes.txt")
//! ```
//!
//! Unknown selectors fail with [`FsError::InvalidSelector`] before any
//! backend is touched. Rename across two selectors fails with
//! [`FsError::CrossFilesystemOperation`]. Everything else a backend returns
//! comes back unchanged.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

use crate::selector::{DEFAULT_DELIMITER, split_path};
use crate::{
    BoxFile, Fs, FsDir, FsError, FsMetadata, FsName, FsOpen, FsWrite, Metadata, OpenFlags,
    Permissions,
};

#[cfg(feature = "tracing")]
macro_rules! trace_route {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_route {
    ($($arg:tt)*) => {};
}

/// A filesystem that dispatches to backends by path prefix.
///
/// The backend map is fixed at construction. `SelectFs` only ever reads it,
/// so a single instance can be shared across threads (e.g. in an `Arc`)
/// without locking. Backends are held as shared handles; their lifecycle
/// belongs to the caller.
///
/// `SelectFs` implements [`Fs`] itself, so it can be registered as a backend
/// of another `SelectFs`.
///
/// # Example
///
/// ```rust
/// use selectfs::{FsError, FsName, FsOpen, SelectFs};
/// use std::collections::HashMap;
/// use std::path::Path;
///
/// let fs = SelectFs::new(HashMap::new());
/// let err = fs.open(Path::new("c://file.txt")).err().unwrap();
/// assert!(matches!(err, FsError::InvalidSelector { ref selector } if selector == "c"));
/// assert_eq!(fs.name(), "SelectFs");
/// ```
#[derive(Clone)]
pub struct SelectFs {
    backends: HashMap<String, Arc<dyn Fs>>,
    delimiter: String,
}

impl SelectFs {
    /// Name reported by [`FsName::name`].
    pub const NAME: &'static str = "SelectFs";

    /// Create a dispatcher over `backends` using [`DEFAULT_DELIMITER`].
    pub fn new(backends: HashMap<String, Arc<dyn Fs>>) -> Self {
        Self::with_delimiter(backends, DEFAULT_DELIMITER)
    }

    /// Create a dispatcher that splits paths on `delimiter` instead of `://`.
    ///
    /// An empty delimiter never matches, so every path routes to the
    /// backend registered under `""`.
    pub fn with_delimiter(
        backends: HashMap<String, Arc<dyn Fs>>,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            backends,
            delimiter: delimiter.into(),
        }
    }

    /// The delimiter separating selector from remainder.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The backend registered under `selector`, if any.
    pub fn backend(&self, selector: &str) -> Option<&Arc<dyn Fs>> {
        self.backends.get(selector)
    }

    /// All registered selectors, in no particular order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> + '_ {
        self.backends.keys().map(String::as_str)
    }

    /// Resolve `path` to its backend and the remainder that backend will see.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidSelector`] if no backend is registered for the selector
    pub fn resolve<'p>(&self, path: &'p Path) -> Result<(&dyn Fs, &'p Path), FsError> {
        let (selector, remainder) = split_path(path, &self.delimiter);
        let fs = self.lookup(selector)?;
        trace_route!(
            selector = %selector.to_string_lossy(),
            remainder = %remainder.display(),
            "route"
        );
        Ok((fs, remainder))
    }

    fn lookup(&self, selector: &OsStr) -> Result<&dyn Fs, FsError> {
        match selector.to_str().and_then(|s| self.backends.get(s)) {
            Some(fs) => Ok(Arc::as_ref(fs)),
            None => {
                trace_route!(selector = %selector.to_string_lossy(), "no backend for selector");
                Err(FsError::InvalidSelector {
                    selector: selector.to_string_lossy().into_owned(),
                })
            }
        }
    }
}

impl Default for SelectFs {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl From<Option<HashMap<String, Arc<dyn Fs>>>> for SelectFs {
    /// `None` is treated as an empty backend map.
    fn from(backends: Option<HashMap<String, Arc<dyn Fs>>>) -> Self {
        Self::new(backends.unwrap_or_default())
    }
}

impl<K: Into<String>> FromIterator<(K, Arc<dyn Fs>)> for SelectFs {
    fn from_iter<I: IntoIterator<Item = (K, Arc<dyn Fs>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, fs)| (k.into(), fs)).collect())
    }
}

impl fmt::Debug for SelectFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut selectors: Vec<&str> = self.selectors().collect();
        selectors.sort_unstable();
        f.debug_struct("SelectFs")
            .field("selectors", &selectors)
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

impl FsOpen for SelectFs {
    fn create(&self, path: &Path) -> Result<BoxFile, FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.create(path)
    }

    fn open(&self, path: &Path) -> Result<BoxFile, FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.open(path)
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> Result<BoxFile, FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.open_file(path, flags, perm)
    }
}

impl FsDir for SelectFs {
    fn create_dir(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.create_dir(path, perm)
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.create_dir_all(path, perm)
    }
}

impl FsWrite for SelectFs {
    fn remove(&self, path: &Path) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.remove(path)
    }

    fn remove_all(&self, path: &Path) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.remove_all(path)
    }

    /// Rename within a single backend.
    ///
    /// The selectors of `from` and `to` must be equal as strings. Once they
    /// are, only the source selector is used for the lookup.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        let (selector, from_rest) = split_path(from, &self.delimiter);
        let (to_selector, to_rest) = split_path(to, &self.delimiter);
        if selector != to_selector {
            trace_route!(
                from = %selector.to_string_lossy(),
                to = %to_selector.to_string_lossy(),
                "refusing cross-filesystem rename"
            );
            return Err(FsError::CrossFilesystemOperation {
                operation: "rename",
            });
        }
        self.lookup(selector)?.rename(from_rest, to_rest)
    }
}

impl FsMetadata for SelectFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.metadata(path)
    }

    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.set_permissions(path, perm)
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: SystemTime,
        modified: SystemTime,
    ) -> Result<(), FsError> {
        let (fs, path) = self.resolve(path)?;
        fs.set_times(path, accessed, modified)
    }
}

impl FsName for SelectFs {
    fn name(&self) -> &str {
        Self::NAME
    }
}

//! Directory creation.

use std::path::Path;

use crate::{FsError, Permissions};

/// Making directories.
///
/// Removal lives on [`FsWrite`](super::FsWrite), which covers files and
/// directories alike. `perm` is the mode the new directory gets; backends
/// without modes ignore it.
pub trait FsDir: Send + Sync {
    /// Make one directory. Its parent has to be there already.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] when the parent is missing
    /// - [`FsError::AlreadyExists`] when anything is already at `path`
    fn create_dir(&self, path: &Path, perm: Permissions) -> Result<(), FsError>;

    /// Make `path` and any missing ancestors. An existing directory is fine.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotADirectory`] when some prefix of `path` is a file
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError>;
}

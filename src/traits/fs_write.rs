//! Removal and rename.

use std::path::Path;

use crate::FsError;

/// Operations that take names away or move them.
pub trait FsWrite: Send + Sync {
    /// Remove a file or an empty directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::DirectoryNotEmpty`] if the path is a non-empty directory
    fn remove(&self, path: &Path) -> Result<(), FsError>;

    /// Remove a path and everything below it.
    ///
    /// Succeeds without doing anything if the path does not exist.
    fn remove_all(&self, path: &Path) -> Result<(), FsError>;

    /// Move `from` to `to` inside this backend, subtree included.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the source path does not exist
    /// - [`FsError::CrossFilesystemOperation`] if the paths live on different
    ///   backends of a [`SelectFs`](crate::SelectFs)
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;
}

//! Metadata queries and updates.

use std::path::Path;
use std::time::SystemTime;

use crate::{FsError, Metadata, Permissions};

/// Metadata operations: stat, chmod and chtimes.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsMetadata`.
pub trait FsMetadata: Send + Sync {
    /// Get metadata for a path (follows symlinks).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError>;

    /// Set permissions on a file or directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotSupported`] if the backend has no permission model
    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), FsError>;

    /// Change the access and modification times of a path.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    fn set_times(&self, path: &Path, accessed: SystemTime, modified: SystemTime)
    -> Result<(), FsError>;
}

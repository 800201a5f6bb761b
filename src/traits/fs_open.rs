//! Opening and creating files.

use std::path::Path;

use crate::{BoxFile, FsError, OpenFlags, Permissions};

/// File open operations for a virtual filesystem.
///
/// All methods use `&self` (interior mutability). Backends manage their own synchronization.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access. Backends should use interior mutability (`RwLock`, `Mutex`)
/// for thread-safe state management.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsOpen`.
pub trait FsOpen: Send + Sync {
    /// Create a file for writing, truncating it if it already exists.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the parent directory does not exist
    /// - [`FsError::NotAFile`] if the path is a directory
    /// - [`FsError::PermissionDenied`] if write access is denied
    fn create(&self, path: &Path) -> Result<BoxFile, FsError>;

    /// Open an existing file for reading.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::PermissionDenied`] if read access is denied
    fn open(&self, path: &Path) -> Result<BoxFile, FsError>;

    /// Open a file with explicit flags.
    ///
    /// `perm` applies only when the call creates the file. Backends without a
    /// permission model may ignore it.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the file does not exist and `flags` do not create it
    /// - [`FsError::AlreadyExists`] if `flags.create_new` is set and the file exists
    fn open_file(&self, path: &Path, flags: OpenFlags, perm: Permissions)
    -> Result<BoxFile, FsError>;
}

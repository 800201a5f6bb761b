//! Filesystem identification.

/// Human-readable name of a filesystem implementation.
pub trait FsName: Send + Sync {
    /// A constant name identifying the implementation, e.g. `"MemoryFs"`.
    fn name(&self) -> &str;
}

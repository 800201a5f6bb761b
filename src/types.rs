//! Value types passed between callers, the router and backends.
//!
//! `SelectFs` never inspects any of these. They exist so that every backend
//! speaks the same vocabulary, and they cross the router untouched.

use std::io::{Read, Seek, Write};
use std::time::SystemTime;

/// Kind of entry a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
}

impl From<std::fs::FileType> for FileType {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            FileType::Directory
        } else if ft.is_symlink() {
            FileType::Symlink
        } else {
            FileType::File
        }
    }
}

/// Result of [`FsMetadata::metadata`](crate::FsMetadata::metadata).
///
/// Backends build one with [`Metadata::file`] or [`Metadata::directory`] and
/// refine it with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// What the path names.
    pub file_type: FileType,
    /// Length in bytes. Backends may report 0 for directories.
    pub size: u64,
    /// Mode bits.
    pub permissions: Permissions,
    /// Last content change.
    #[cfg_attr(feature = "serde", serde(with = "unix_time"))]
    pub modified: SystemTime,
    /// Last read.
    #[cfg_attr(feature = "serde", serde(with = "unix_time"))]
    pub accessed: SystemTime,
}

impl Metadata {
    /// A regular file of `size` bytes with [`Permissions::default_file`].
    pub const fn file(size: u64) -> Self {
        Self {
            file_type: FileType::File,
            size,
            permissions: Permissions::default_file(),
            modified: SystemTime::UNIX_EPOCH,
            accessed: SystemTime::UNIX_EPOCH,
        }
    }

    /// An empty directory with [`Permissions::default_dir`].
    pub const fn directory() -> Self {
        Self {
            file_type: FileType::Directory,
            size: 0,
            permissions: Permissions::default_dir(),
            modified: SystemTime::UNIX_EPOCH,
            accessed: SystemTime::UNIX_EPOCH,
        }
    }

    /// Replace the mode bits.
    #[must_use]
    pub const fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Replace both timestamps.
    #[must_use]
    pub const fn with_times(mut self, accessed: SystemTime, modified: SystemTime) -> Self {
        self.accessed = accessed;
        self.modified = modified;
        self
    }

    /// Whether this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Whether this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Whether this is a symbolic link.
    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::file(0)
    }
}

/// Host metadata. Timestamps the platform cannot report become the epoch.
impl From<&std::fs::Metadata> for Metadata {
    fn from(meta: &std::fs::Metadata) -> Self {
        let base = if meta.is_dir() {
            Metadata::directory()
        } else {
            Metadata {
                file_type: meta.file_type().into(),
                ..Metadata::file(meta.len())
            }
        };
        base.with_permissions(meta.permissions().into()).with_times(
            meta.accessed().unwrap_or(SystemTime::UNIX_EPOCH),
            meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        )
    }
}

/// Mode bits: `rwx` for user, group and other, plus setuid, setgid and sticky.
///
/// Anything above `0o7777` (such as the file-type bits of `st_mode`) is
/// discarded on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u32);

impl Permissions {
    const MASK: u32 = 0o7777;
    const WRITE_BITS: u32 = 0o222;

    /// Permissions from a raw mode such as `0o640`.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    /// The mode bits.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// `true` when no write bit is set for anyone.
    #[inline]
    pub const fn readonly(&self) -> bool {
        self.0 & Self::WRITE_BITS == 0
    }

    /// `0o644`, used for new files.
    #[inline]
    pub const fn default_file() -> Self {
        Self(0o644)
    }

    /// `0o755`, used for new directories.
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o755)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::default_file()
    }
}

#[cfg(unix)]
impl From<std::fs::Permissions> for Permissions {
    fn from(perm: std::fs::Permissions) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::from_mode(perm.mode())
    }
}

/// Only the read-only bit is known here, so the result is either `0o444` or
/// [`Permissions::default_file`].
#[cfg(not(unix))]
impl From<std::fs::Permissions> for Permissions {
    fn from(perm: std::fs::Permissions) -> Self {
        if perm.readonly() {
            Self::from_mode(0o444)
        } else {
            Self::default_file()
        }
    }
}

#[cfg(unix)]
impl From<Permissions> for std::fs::Permissions {
    fn from(perm: Permissions) -> Self {
        use std::os::unix::fs::PermissionsExt;
        std::fs::Permissions::from_mode(perm.mode())
    }
}

/// Flags for [`FsOpen::open_file`](crate::FsOpen::open_file).
///
/// Mirrors [`std::fs::OpenOptions`]. The router passes these through as-is.
///
/// ```rust
/// use selectfs::OpenFlags;
///
/// let flags = OpenFlags::new().write(true).create(true);
/// assert!(flags.create && !flags.truncate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenFlags {
    /// Allow reads.
    pub read: bool,
    /// Allow writes.
    pub write: bool,
    /// Every write goes to the end.
    pub append: bool,
    /// Create the file if it is missing.
    pub create: bool,
    /// Create the file, failing if it exists.
    pub create_new: bool,
    /// Cut an existing file to zero length.
    pub truncate: bool,
}

impl OpenFlags {
    /// `open`.
    pub const READ: Self = Self::new().read(true);
    /// `create`: write, create, truncate.
    pub const WRITE: Self = Self::new().write(true).create(true).truncate(true);
    /// Read and write an existing file.
    pub const READ_WRITE: Self = Self::new().read(true).write(true);
    /// Write at the end, creating if missing.
    pub const APPEND: Self = Self::new().write(true).append(true).create(true);
    /// Write to a file that must not exist yet.
    pub const CREATE_NEW: Self = Self::new().write(true).create_new(true);

    /// All flags off.
    pub const fn new() -> Self {
        Self {
            read: false,
            write: false,
            append: false,
            create: false,
            create_new: false,
            truncate: false,
        }
    }

    /// Set [`read`](Self::read).
    #[must_use]
    pub const fn read(mut self, on: bool) -> Self {
        self.read = on;
        self
    }

    /// Set [`write`](Self::write).
    #[must_use]
    pub const fn write(mut self, on: bool) -> Self {
        self.write = on;
        self
    }

    /// Set [`append`](Self::append).
    #[must_use]
    pub const fn append(mut self, on: bool) -> Self {
        self.append = on;
        self
    }

    /// Set [`create`](Self::create).
    #[must_use]
    pub const fn create(mut self, on: bool) -> Self {
        self.create = on;
        self
    }

    /// Set [`create_new`](Self::create_new).
    #[must_use]
    pub const fn create_new(mut self, on: bool) -> Self {
        self.create_new = on;
        self
    }

    /// Set [`truncate`](Self::truncate).
    #[must_use]
    pub const fn truncate(mut self, on: bool) -> Self {
        self.truncate = on;
        self
    }

    /// Whether a handle opened with these flags accepts writes.
    #[inline]
    pub const fn writable(&self) -> bool {
        self.write || self.append
    }
}

impl From<OpenFlags> for std::fs::OpenOptions {
    fn from(flags: OpenFlags) -> Self {
        let mut options = std::fs::OpenOptions::new();
        options
            .read(flags.read)
            .write(flags.write)
            .append(flags.append)
            .create(flags.create)
            .create_new(flags.create_new)
            .truncate(flags.truncate);
        options
    }
}

/// An open file returned by a backend.
///
/// Any `Read + Write + Seek + Send` value qualifies, so `std::fs::File` and
/// `std::io::Cursor<Vec<u8>>` work as-is. Handles opened read-only are
/// expected to fail writes rather than omit the capability.
pub trait FileHandle: Read + Write + Seek + Send {}

impl<T: Read + Write + Seek + Send + ?Sized> FileHandle for T {}

/// Boxed file handle, the return type of the open family of operations.
pub type BoxFile = Box<dyn FileHandle>;

/// `SystemTime` as `[secs, nanos]` since the Unix epoch. Earlier times clamp
/// to the epoch.
#[cfg(feature = "serde")]
mod unix_time {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime};

    pub fn serialize<S: Serializer>(time: &SystemTime, ser: S) -> Result<S::Ok, S::Error> {
        let since = time
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();
        (since.as_secs(), since.subsec_nanos()).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<SystemTime, D::Error> {
        let (secs, nanos) = <(u64, u32)>::deserialize(de)?;
        Ok(SystemTime::UNIX_EPOCH + Duration::new(secs, nanos))
    }
}

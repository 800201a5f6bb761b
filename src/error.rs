//! The error type shared by the router and every backend.

use std::io;
use std::path::PathBuf;

/// Everything an [`Fs`](crate::Fs) operation can fail with.
///
/// Routers and backends return the same type, so a backend error passes
/// through [`SelectFs`](crate::SelectFs) as-is. The router itself only ever
/// produces [`InvalidSelector`](FsError::InvalidSelector) and
/// [`CrossFilesystemOperation`](FsError::CrossFilesystemOperation); see
/// [`is_routing_error`](FsError::is_routing_error).
///
/// # Examples
///
/// ```rust
/// use selectfs::FsError;
///
/// let err = FsError::InvalidSelector { selector: "c".into() };
/// assert_eq!(err.to_string(), "invalid selector: \"c\"");
/// assert!(err.is_routing_error());
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    // --- raised by the router ---
    /// No backend is registered under the parsed selector.
    #[error("invalid selector: {selector:?}")]
    InvalidSelector {
        /// The selector that has no backend. Lossy if it was not UTF-8.
        selector: String,
    },

    /// The two paths of a two-path operation name different selectors.
    #[error("{operation}: cross-filesystem operation not supported")]
    CrossFilesystemOperation {
        /// The refused operation.
        operation: &'static str,
    },

    // --- raised by backends ---
    /// Nothing exists at `path`.
    #[error("no such file or directory: {path}")]
    NotFound {
        /// Path as the backend saw it.
        path: PathBuf,
    },

    /// Something already exists at `path`.
    #[error("{operation} {path}: file exists")]
    AlreadyExists {
        /// Path as the backend saw it.
        path: PathBuf,
        /// Operation that hit the conflict.
        operation: &'static str,
    },

    /// A file was required and `path` is something else.
    #[error("is a directory: {path}")]
    NotAFile {
        /// Path as the backend saw it.
        path: PathBuf,
    },

    /// A directory was required and `path` is something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Path as the backend saw it.
        path: PathBuf,
    },

    /// Removing `path` requires it to be empty first.
    #[error("directory not empty: {path}")]
    DirectoryNotEmpty {
        /// Path as the backend saw it.
        path: PathBuf,
    },

    /// The backend refused access to `path`.
    #[error("{operation} {path}: permission denied")]
    PermissionDenied {
        /// Path as the backend saw it.
        path: PathBuf,
        /// Refused operation.
        operation: &'static str,
    },

    /// The backend does not accept writes.
    #[error("{operation}: read-only file system")]
    ReadOnly {
        /// Refused operation.
        operation: &'static str,
    },

    /// File contents could not be interpreted.
    #[error("invalid data in {path}: {details}")]
    InvalidData {
        /// Path as the caller gave it.
        path: PathBuf,
        /// What was wrong.
        details: String,
    },

    /// A value could not be encoded (JSON helpers).
    #[error("serialize: {0}")]
    Serialization(String),

    /// File contents could not be decoded (JSON helpers).
    #[error("deserialize: {0}")]
    Deserialization(String),

    /// The backend does not implement the operation.
    #[error("{operation}: operation not supported")]
    NotSupported {
        /// Unsupported operation.
        operation: &'static str,
    },

    /// Backend-specific failure with no better variant.
    #[error("backend: {0}")]
    Backend(String),

    /// Raw I/O failure.
    #[error("{operation} {path}: {source}")]
    Io {
        /// Operation that failed.
        operation: &'static str,
        /// Path involved, empty if unknown.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// `true` for the two errors produced by routing rather than by a backend.
    ///
    /// Such errors mean the path or the router configuration is wrong.
    /// Retrying the same call cannot succeed.
    pub fn is_routing_error(&self) -> bool {
        matches!(
            self,
            FsError::InvalidSelector { .. } | FsError::CrossFilesystemOperation { .. }
        )
    }

    /// Wrap `source` as [`FsError::Io`] without looking at its kind.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Translate `source` into the matching variant, keeping `operation` and
    /// `path`. Kinds without a dedicated variant become [`FsError::Io`].
    ///
    /// ```rust
    /// use selectfs::FsError;
    /// use std::io;
    ///
    /// let err = FsError::from_io("open", "a.txt", io::ErrorKind::NotFound.into());
    /// assert!(matches!(err, FsError::NotFound { ref path } if path.as_os_str() == "a.txt"));
    /// ```
    pub fn from_io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path, operation },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, operation },
            io::ErrorKind::IsADirectory => FsError::NotAFile { path },
            io::ErrorKind::NotADirectory => FsError::NotADirectory { path },
            io::ErrorKind::DirectoryNotEmpty => FsError::DirectoryNotEmpty { path },
            io::ErrorKind::ReadOnlyFilesystem => FsError::ReadOnly { operation },
            io::ErrorKind::Unsupported => FsError::NotSupported { operation },
            _ => FsError::Io {
                operation,
                path,
                source,
            },
        }
    }
}

/// Context-free conversion for `?`; the path is left empty.
impl From<io::Error> for FsError {
    fn from(source: io::Error) -> Self {
        FsError::from_io("io", PathBuf::new(), source)
    }
}

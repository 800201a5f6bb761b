//! Whole-file and existence helpers layered on the core operations.
//!
//! [`FsExt`] is implemented for every [`Fs`], `dyn Fs` and
//! [`SelectFs`](crate::SelectFs) included. Each helper is a short composition
//! of `metadata`, `open` or `create`, so a helper called on a `SelectFs`
//! routes exactly like the operation underneath it.
//!
//! | Helper | Built on | `NotFound` becomes |
//! |--------|----------|--------------------|
//! | [`probe`](FsExt::probe) | `metadata` | `Ok(None)` |
//! | [`exists`](FsExt::exists) | `metadata` | `Ok(false)` |
//! | [`is_file`](FsExt::is_file) | `metadata` | `Ok(false)` |
//! | [`is_dir`](FsExt::is_dir) | `metadata` | `Ok(false)` |
//! | [`file_size`](FsExt::file_size) | `metadata` | error |
//! | [`read`](FsExt::read) | `open` | error |
//! | [`read_to_string`](FsExt::read_to_string) | `open` | error |
//! | [`write`](FsExt::write) | `create` | error |
//!
//! `FsExtJson` (feature `serde`) adds `read_json` and `write_json`.

use std::io::{Read, Write};
use std::path::Path;

use crate::{Fs, FsError, Metadata};

/// Convenience methods available on every backend.
///
/// ```rust
/// use selectfs::{Fs, FsError, FsExt};
/// use std::path::Path;
///
/// /// Copies between two backends of the same router.
/// fn mirror(fs: &dyn Fs, from: &str, to: &str) -> Result<u64, FsError> {
///     let bytes = fs.read(Path::new(from))?;
///     fs.write(Path::new(to), &bytes)?;
///     fs.file_size(Path::new(to))
/// }
/// ```
pub trait FsExt: Fs {
    /// `metadata`, with a missing path reported as `None`.
    ///
    /// Routing errors and every other backend error are still returned.
    fn probe(&self, path: &Path) -> Result<Option<Metadata>, FsError> {
        match self.metadata(path) {
            Ok(meta) => Ok(Some(meta)),
            Err(FsError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        Ok(self.probe(path)?.is_some())
    }

    /// Whether `path` is a regular file. `false` if it does not exist.
    fn is_file(&self, path: &Path) -> Result<bool, FsError> {
        Ok(self.probe(path)?.is_some_and(|m| m.is_file()))
    }

    /// Whether `path` is a directory. `false` if it does not exist.
    fn is_dir(&self, path: &Path) -> Result<bool, FsError> {
        Ok(self.probe(path)?.is_some_and(|m| m.is_dir()))
    }

    /// Size of `path` in bytes, as reported by `metadata`.
    fn file_size(&self, path: &Path) -> Result<u64, FsError> {
        self.metadata(path).map(|m| m.size)
    }

    /// The whole contents of `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let mut buf = Vec::new();
        self.open(path)?
            .read_to_end(&mut buf)
            .map_err(|e| FsError::io("read", path, e))?;
        Ok(buf)
    }

    /// The whole contents of `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// [`FsError::InvalidData`] when the bytes are not UTF-8, plus anything
    /// [`read`](FsExt::read) returns.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        String::from_utf8(self.read(path)?).map_err(|e| FsError::InvalidData {
            path: path.to_path_buf(),
            details: e.utf8_error().to_string(),
        })
    }

    /// Replace the contents of `path` with `data`, creating it if needed.
    ///
    /// The handle is flushed before it is dropped.
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        let mut file = self.create(path)?;
        file.write_all(data)
            .map_err(|e| FsError::io("write", path, e))?;
        file.flush().map_err(|e| FsError::io("flush", path, e))
    }
}

impl<B: Fs + ?Sized> FsExt for B {}

// =============================================================================
// JSON (feature "serde")
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::FsExt;
    use crate::{Fs, FsError};
    use serde::{Serialize, de::DeserializeOwned};
    use std::path::Path;

    /// Read and write JSON documents through any backend.
    pub trait FsExtJson: Fs {
        /// Decode the contents of `path` as JSON.
        ///
        /// # Errors
        ///
        /// [`FsError::Deserialization`] for malformed JSON, plus anything
        /// [`FsExt::read`] returns.
        fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, FsError> {
            let bytes = self.read(path)?;
            serde_json::from_slice(&bytes).map_err(|e| FsError::Deserialization(e.to_string()))
        }

        /// Encode `value` as pretty-printed JSON into `path`.
        ///
        /// # Errors
        ///
        /// [`FsError::Serialization`] if `value` cannot be encoded, plus
        /// anything [`FsExt::write`] returns.
        fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), FsError> {
            let bytes = serde_json::to_vec_pretty(value)
                .map_err(|e| FsError::Serialization(e.to_string()))?;
            self.write(path, &bytes)
        }
    }

    impl<B: Fs + ?Sized> FsExtJson for B {}
}

#[cfg(feature = "serde")]
pub use json::FsExtJson;

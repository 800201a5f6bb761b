//! # Filesystem Traits
//!
//! The capability interface every backend implements, and that
//! [`SelectFs`](crate::SelectFs) implements in turn.
//!
//! ## Quick Reference
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`FsOpen`] | `create`, `open`, `open_file` |
//! | [`FsDir`] | `create_dir`, `create_dir_all` |
//! | [`FsWrite`] | `remove`, `remove_all`, `rename` |
//! | [`FsMetadata`] | `metadata`, `set_permissions`, `set_times` |
//! | [`FsName`] | `name` |
//! | [`Fs`] | all of the above |
//!
//! ## Blanket Implementation
//!
//! Implement the component traits and you get [`Fs`] automatically:
//!
//! ```rust
//! use selectfs::{BoxFile, Fs, FsDir, FsError, FsMetadata, FsName, FsOpen, FsWrite};
//! use selectfs::{Metadata, OpenFlags, Permissions};
//! use std::path::Path;
//! use std::time::SystemTime;
//!
//! struct NullFs;
//!
//! # impl FsOpen for NullFs {
//! #     fn create(&self, _: &Path) -> Result<BoxFile, FsError> { Ok(Box::new(std::io::Cursor::new(Vec::new()))) }
//! #     fn open(&self, p: &Path) -> Result<BoxFile, FsError> { Err(FsError::NotFound { path: p.into() }) }
//! #     fn open_file(&self, p: &Path, _: OpenFlags, _: Permissions) -> Result<BoxFile, FsError> { self.open(p) }
//! # }
//! # impl FsDir for NullFs {
//! #     fn create_dir(&self, _: &Path, _: Permissions) -> Result<(), FsError> { Ok(()) }
//! #     fn create_dir_all(&self, _: &Path, _: Permissions) -> Result<(), FsError> { Ok(()) }
//! # }
//! # impl FsWrite for NullFs {
//! #     fn remove(&self, _: &Path) -> Result<(), FsError> { Ok(()) }
//! #     fn remove_all(&self, _: &Path) -> Result<(), FsError> { Ok(()) }
//! #     fn rename(&self, _: &Path, _: &Path) -> Result<(), FsError> { Ok(()) }
//! # }
//! # impl FsMetadata for NullFs {
//! #     fn metadata(&self, p: &Path) -> Result<Metadata, FsError> { Err(FsError::NotFound { path: p.into() }) }
//! #     fn set_permissions(&self, _: &Path, _: Permissions) -> Result<(), FsError> { Ok(()) }
//! #     fn set_times(&self, _: &Path, _: SystemTime, _: SystemTime) -> Result<(), FsError> { Ok(()) }
//! # }
//! # impl FsName for NullFs {
//! #     fn name(&self) -> &str { "NullFs" }
//! # }
//! fn use_fs(fs: &dyn Fs) -> &str {
//!     fs.name()
//! }
//! assert_eq!(use_fs(&NullFs), "NullFs");
//! ```
//!
//! ## Thread Safety
//!
//! Every trait has `Send + Sync` as a supertrait and every method takes
//! `&self`, so `Arc<dyn Fs>` can be shared between threads and registered in
//! a router. A backend with mutable state keeps it behind its own lock.

mod fs_dir;
mod fs_metadata;
mod fs_name;
mod fs_open;
mod fs_write;

pub use fs_dir::FsDir;
pub use fs_metadata::FsMetadata;
pub use fs_name::FsName;
pub use fs_open::FsOpen;
pub use fs_write::FsWrite;

/// A complete filesystem backend.
///
/// Combines opening ([`FsOpen`]), directory creation ([`FsDir`]), removal and
/// rename ([`FsWrite`]), metadata ([`FsMetadata`]) and identification
/// ([`FsName`]). This is the trait object stored behind every selector of a
/// [`SelectFs`](crate::SelectFs), and `SelectFs` implements it too, so
/// dispatchers nest.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type that implements all component traits.
/// You never need to implement `Fs` directly.
///
/// # Example
///
/// ```rust
/// use selectfs::{Fs, FsError, Permissions};
/// use std::io::Write;
/// use std::path::Path;
///
/// fn write_report<B: Fs + ?Sized>(fs: &B, dir: &Path) -> Result<(), FsError> {
///     fs.create_dir_all(dir, Permissions::default_dir())?;
///     let path = dir.join("report.txt");
///     let mut file = fs.create(&path)?;
///     file.write_all(b"ok").map_err(|e| FsError::io("write", &path, e))?;
///     Ok(())
/// }
/// ```
pub trait Fs: FsOpen + FsDir + FsWrite + FsMetadata + FsName {}

impl<T: FsOpen + FsDir + FsWrite + FsMetadata + FsName + ?Sized> Fs for T {}

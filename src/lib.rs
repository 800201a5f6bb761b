//! # selectfs
//!
//! A **filesystem multiplexer**: one [`Fs`] handle that routes every operation
//! to one of several backends, chosen by a selector prefix in the path.
//!
//! ```text
//! "mem://notes/today.txt"   ──▶ backends["mem"]  sees "notes/today.txt"
//! "disk:///var/log/app.log" ──▶ backends["disk"] sees "/var/log/app.log"
//! "scratch.txt"             ──▶ backends[""]     sees "scratch.txt"
//! ```
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use selectfs::{Fs, FsError, FsMetadata, SelectFs};
//! use std::collections::HashMap;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn build(mem: Arc<dyn Fs>, disk: Arc<dyn Fs>) -> SelectFs {
//!     let mut backends = HashMap::new();
//!     backends.insert("mem".to_string(), mem);
//!     backends.insert("disk".to_string(), disk);
//!     SelectFs::new(backends)
//! }
//!
//! // Unknown selectors never reach a backend.
//! let fs = SelectFs::default();
//! assert!(matches!(
//!     fs.metadata(Path::new("nope://x")),
//!     Err(FsError::InvalidSelector { .. })
//! ));
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Fs`] | Capability interface every backend implements |
//! | [`SelectFs`] | The router; itself an [`Fs`], so routers nest |
//! | [`split_selector`] | Pure `(selector, remainder)` parser |
//! | [`FsError`] | Shared error type, including the two routing errors |
//! | [`Metadata`] | Stat result (type, size, mode, times) |
//! | [`OpenFlags`] | Flags for [`FsOpen::open_file`] |
//! | [`BoxFile`] | Open file handle returned by backends |
//!
//! ---
//!
//! ## Routing Rules
//!
//! - The path is split at the **first** delimiter (default `"://"`).
//! - No delimiter means the empty selector; register a backend under `""` to
//!   give such paths a default home.
//! - An unregistered selector fails with [`FsError::InvalidSelector`].
//! - [`FsWrite::rename`] requires both paths to carry the same selector,
//!   otherwise [`FsError::CrossFilesystemOperation`].
//! - Whatever the backend returns, value or error, is returned unchanged.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. `SelectFs` never mutates
//! its backend map after construction, so it can be shared through an `Arc`
//! without locking; concurrency semantics beyond that are the backends'.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Metadata`], [`Permissions`], [`OpenFlags`]; `FsExtJson` |
//! | `tracing` | `trace!` events for routing decisions |

// Private modules
mod error;
mod ext;
mod select;
mod selector;
mod traits;
mod types;

// Public re-exports - error types
pub use error::FsError;

// Public re-exports - core types
pub use types::{BoxFile, FileHandle, FileType, Metadata, OpenFlags, Permissions};

// Public re-exports - capability traits
pub use traits::{Fs, FsDir, FsMetadata, FsName, FsOpen, FsWrite};

// Public re-exports - routing
pub use select::SelectFs;
pub use selector::{DEFAULT_DELIMITER, split_selector};

// Public re-exports - infrastructure
pub use ext::FsExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsExtJson;

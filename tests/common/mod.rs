//! Backends shared by the integration suites.
//!
//! - [`MemoryFs`]: a small but honest in-memory filesystem.
//! - [`RecordingFs`]: records every call it receives, optionally failing it.

#![allow(dead_code)]

use selectfs::*;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use std::time::SystemTime;

// =============================================================================
// MemoryFs
// =============================================================================

#[derive(Debug, Clone)]
struct Node {
    file_type: FileType,
    data: Vec<u8>,
    permissions: Permissions,
    modified: SystemTime,
    accessed: SystemTime,
}

impl Node {
    fn file(permissions: Permissions) -> Self {
        let now = SystemTime::now();
        Self {
            file_type: FileType::File,
            data: Vec::new(),
            permissions,
            modified: now,
            accessed: now,
        }
    }

    fn dir(permissions: Permissions) -> Self {
        Self {
            file_type: FileType::Directory,
            ..Self::file(permissions)
        }
    }
}

type Tree = Arc<RwLock<HashMap<PathBuf, Node>>>;

/// In-memory filesystem. `""` and `"/"` both name the implicit root.
#[derive(Default)]
pub struct MemoryFs {
    nodes: Tree,
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new("/")
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file directly, bypassing the trait.
    pub fn with_file(self, path: &str, contents: &[u8]) -> Self {
        let mut node = Node::file(Permissions::default_file());
        node.data = contents.to_vec();
        self.nodes
            .write()
            .unwrap()
            .insert(PathBuf::from(path), node);
        self
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.nodes
            .read()
            .unwrap()
            .get(Path::new(path))
            .map(|n| n.data.clone())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.nodes.read().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn parent_is_dir(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if is_root(parent) => true,
            Some(parent) => self
                .nodes
                .read()
                .unwrap()
                .get(parent)
                .is_some_and(|n| n.file_type == FileType::Directory),
        }
    }

    fn handle(&self, path: &Path, data: Vec<u8>, writable: bool) -> BoxFile {
        Box::new(MemFile {
            path: path.to_path_buf(),
            cursor: Cursor::new(data),
            nodes: Arc::clone(&self.nodes),
            writable,
            dirty: false,
        })
    }
}

/// Open handle; writes land in the tree on flush or drop.
struct MemFile {
    path: PathBuf,
    cursor: Cursor<Vec<u8>>,
    nodes: Tree,
    writable: bool,
    dirty: bool,
}

impl MemFile {
    fn write_back(&mut self) {
        if !self.dirty {
            return;
        }
        if let Some(node) = self.nodes.write().unwrap().get_mut(&self.path) {
            node.data = self.cursor.get_ref().clone();
            node.modified = SystemTime::now();
        }
        self.dirty = false;
    }
}

impl Read for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Write for MemFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.writable {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "file opened read-only",
            ));
        }
        self.dirty = true;
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_back();
        Ok(())
    }
}

impl Seek for MemFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl Drop for MemFile {
    fn drop(&mut self) {
        self.write_back();
    }
}

impl FsOpen for MemoryFs {
    fn create(&self, path: &Path) -> Result<BoxFile, FsError> {
        self.open_file(path, OpenFlags::WRITE, Permissions::default_file())
    }

    fn open(&self, path: &Path) -> Result<BoxFile, FsError> {
        self.open_file(path, OpenFlags::READ, Permissions::default_file())
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> Result<BoxFile, FsError> {
        if !self.parent_is_dir(path) {
            return Err(FsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let mut nodes = self.nodes.write().unwrap();
        let data = match nodes.get(path).map(|n| n.file_type) {
            Some(FileType::Directory) => {
                return Err(FsError::NotAFile {
                    path: path.to_path_buf(),
                });
            }
            Some(_) if flags.create_new => {
                return Err(FsError::AlreadyExists {
                    path: path.to_path_buf(),
                    operation: "open_file",
                });
            }
            Some(_) => {
                let node = nodes.get_mut(path).unwrap();
                if flags.truncate {
                    node.data.clear();
                }
                node.accessed = SystemTime::now();
                node.data.clone()
            }
            None if flags.create || flags.create_new => {
                nodes.insert(path.to_path_buf(), Node::file(perm));
                Vec::new()
            }
            None => {
                return Err(FsError::NotFound {
                    path: path.to_path_buf(),
                });
            }
        };
        drop(nodes);

        let mut file = self.handle(path, data, flags.writable());
        if flags.append {
            file.seek(SeekFrom::End(0))
                .map_err(|e| FsError::io("open_file", path, e))?;
        }
        Ok(file)
    }
}

impl FsDir for MemoryFs {
    fn create_dir(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        if !self.parent_is_dir(path) {
            return Err(FsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let mut nodes = self.nodes.write().unwrap();
        if is_root(path) || nodes.contains_key(path) {
            return Err(FsError::AlreadyExists {
                path: path.to_path_buf(),
                operation: "create_dir",
            });
        }
        nodes.insert(path.to_path_buf(), Node::dir(perm));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let mut nodes = self.nodes.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if is_root(&current) {
                continue;
            }
            match nodes.get(&current) {
                Some(node) if node.file_type != FileType::Directory => {
                    return Err(FsError::NotADirectory { path: current });
                }
                Some(_) => {}
                None => {
                    nodes.insert(current.clone(), Node::dir(perm));
                }
            }
        }
        Ok(())
    }
}

impl FsWrite for MemoryFs {
    fn remove(&self, path: &Path) -> Result<(), FsError> {
        let mut nodes = self.nodes.write().unwrap();
        let node = nodes.get(path).ok_or_else(|| FsError::NotFound {
            path: path.to_path_buf(),
        })?;
        if node.file_type == FileType::Directory
            && nodes.keys().any(|p| p != path && p.starts_with(path))
        {
            return Err(FsError::DirectoryNotEmpty {
                path: path.to_path_buf(),
            });
        }
        nodes.remove(path);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> Result<(), FsError> {
        self.nodes
            .write()
            .unwrap()
            .retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        let mut nodes = self.nodes.write().unwrap();
        if !nodes.contains_key(from) {
            return Err(FsError::NotFound {
                path: from.to_path_buf(),
            });
        }
        let moved: Vec<PathBuf> = nodes
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            if let Some(node) = nodes.remove(&old) {
                let suffix = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                nodes.insert(new, node);
            }
        }
        Ok(())
    }
}

impl FsMetadata for MemoryFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        if is_root(path) {
            return Ok(Metadata::directory());
        }
        let nodes = self.nodes.read().unwrap();
        let node = nodes.get(path).ok_or_else(|| FsError::NotFound {
            path: path.to_path_buf(),
        })?;
        Ok(Metadata {
            file_type: node.file_type,
            size: node.data.len() as u64,
            permissions: node.permissions,
            modified: node.modified,
            accessed: node.accessed,
        })
    }

    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let mut nodes = self.nodes.write().unwrap();
        let node = nodes.get_mut(path).ok_or_else(|| FsError::NotFound {
            path: path.to_path_buf(),
        })?;
        node.permissions = perm;
        Ok(())
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: SystemTime,
        modified: SystemTime,
    ) -> Result<(), FsError> {
        let mut nodes = self.nodes.write().unwrap();
        let node = nodes.get_mut(path).ok_or_else(|| FsError::NotFound {
            path: path.to_path_buf(),
        })?;
        node.accessed = accessed;
        node.modified = modified;
        Ok(())
    }
}

impl FsName for MemoryFs {
    fn name(&self) -> &str {
        "MemoryFs"
    }
}

// =============================================================================
// RecordingFs
// =============================================================================

/// One call as received by a [`RecordingFs`], arguments included.
///
/// Paths are kept as raw `OsString`s: `Path` equality would hide a
/// remainder whose separators were collapsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(OsString),
    Open(OsString),
    OpenFile(OsString, OpenFlags, Permissions),
    CreateDir(OsString, Permissions),
    CreateDirAll(OsString, Permissions),
    Remove(OsString),
    RemoveAll(OsString),
    Rename(OsString, OsString),
    Metadata(OsString),
    SetPermissions(OsString, Permissions),
    SetTimes(OsString, SystemTime, SystemTime),
}

/// Backend that only records what it is asked to do.
#[derive(Default)]
pub struct RecordingFs {
    calls: Mutex<Vec<Call>>,
    failing: bool,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call is recorded, then fails with `FsError::Backend` naming the
    /// operation.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, operation: &'static str) -> Result<(), FsError> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(FsError::Backend(format!("{operation} rejected")))
        } else {
            Ok(())
        }
    }
}

fn raw(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}

fn empty_file() -> BoxFile {
    Box::new(Cursor::new(Vec::new()))
}

impl FsOpen for RecordingFs {
    fn create(&self, path: &Path) -> Result<BoxFile, FsError> {
        self.record(Call::Create(raw(path)), "create")
            .map(|()| empty_file())
    }

    fn open(&self, path: &Path) -> Result<BoxFile, FsError> {
        self.record(Call::Open(raw(path)), "open")
            .map(|()| empty_file())
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> Result<BoxFile, FsError> {
        self.record(Call::OpenFile(raw(path), flags, perm), "open_file")
            .map(|()| empty_file())
    }
}

impl FsDir for RecordingFs {
    fn create_dir(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        self.record(Call::CreateDir(raw(path), perm), "create_dir")
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        self.record(Call::CreateDirAll(raw(path), perm), "create_dir_all")
    }
}

impl FsWrite for RecordingFs {
    fn remove(&self, path: &Path) -> Result<(), FsError> {
        self.record(Call::Remove(raw(path)), "remove")
    }

    fn remove_all(&self, path: &Path) -> Result<(), FsError> {
        self.record(Call::RemoveAll(raw(path)), "remove_all")
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        self.record(Call::Rename(raw(from), raw(to)), "rename")
    }
}

impl FsMetadata for RecordingFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        self.record(Call::Metadata(raw(path)), "metadata")
            .map(|()| Metadata::default())
    }

    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        self.record(Call::SetPermissions(raw(path), perm), "set_permissions")
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: SystemTime,
        modified: SystemTime,
    ) -> Result<(), FsError> {
        self.record(Call::SetTimes(raw(path), accessed, modified), "set_times")
    }
}

impl FsName for RecordingFs {
    fn name(&self) -> &str {
        "RecordingFs"
    }
}

/// Build a `SelectFs` from `selector => backend` pairs.
///
/// Each backend goes through `HashMap::insert`, so any `Arc<impl Fs>`
/// coerces to `Arc<dyn Fs>`.
macro_rules! select {
    ($($selector:expr => $fs:expr),* $(,)?) => {{
        let mut backends: ::std::collections::HashMap<String, ::std::sync::Arc<dyn ::selectfs::Fs>> =
            ::std::collections::HashMap::new();
        $( backends.insert(::std::string::String::from($selector), $fs); )*
        ::selectfs::SelectFs::new(backends)
    }};
}

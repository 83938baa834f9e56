//! In-memory filesystem collaborator.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

use bigtree_core::{DirEntry, WalkError};

use crate::fs::Filesystem;

/// Map-backed filesystem for embedding and tests.
///
/// Directories list their children in insertion order, so walks over a
/// `MemoryFs` are fully deterministic. Listings can be made to fail for
/// chosen paths with [`fail`](Self::fail), which is how error-propagation
/// behavior is exercised without touching a disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
    failures: HashMap<PathBuf, std::io::ErrorKind>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory, linking it as a child of its parent.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        let entry = DirEntry::directory(entry_name(&path));
        self.link_to_parent(&path, entry);
        self.dirs.entry(path).or_default();
        self
    }

    /// Register a file of `size` bytes under its parent directory.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, size: u64) -> &mut Self {
        let path = path.into();
        let entry = DirEntry::file(entry_name(&path), size);
        self.link_to_parent(&path, entry);
        self
    }

    /// Register an entry that is neither file nor directory.
    pub fn add_other(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        let entry = DirEntry::other(entry_name(&path));
        self.link_to_parent(&path, entry);
        self
    }

    /// Make listings of `path` fail with the given error kind.
    pub fn fail(&mut self, path: impl Into<PathBuf>, kind: std::io::ErrorKind) -> &mut Self {
        self.failures.insert(path.into(), kind);
        self
    }

    fn link_to_parent(&mut self, path: &Path, entry: DirEntry) {
        if let Some(parent) = path.parent() {
            self.dirs.entry(parent.to_path_buf()).or_default().push(entry);
        }
    }

    fn is_known_non_dir(&self, path: &Path) -> bool {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return false;
        };
        let name = name.to_string_lossy();
        self.dirs
            .get(parent)
            .is_some_and(|entries| {
                entries
                    .iter()
                    .any(|e| e.name.as_str() == name && !e.kind.is_dir())
            })
    }
}

impl Filesystem for MemoryFs {
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, WalkError> {
        if let Some(kind) = self.failures.get(path) {
            return Err(WalkError::io(path, (*kind).into()));
        }
        if let Some(entries) = self.dirs.get(path) {
            return Ok(entries.clone());
        }
        if self.is_known_non_dir(path) {
            return Err(WalkError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Err(WalkError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

fn entry_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned().into())
        .unwrap_or_else(|| "/".into())
}

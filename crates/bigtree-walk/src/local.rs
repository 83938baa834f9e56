//! Local-disk filesystem collaborator.

use std::path::Path;

use bigtree_core::{DirEntry, WalkError};

use crate::fs::Filesystem;

/// Filesystem collaborator reading the local disk via `tokio::fs`.
///
/// Listing order is whatever the OS yields and is not guaranteed stable
/// across runs. Entries that are neither files nor directories (symlinks,
/// sockets, devices) are reported as [`DirEntry::other`]; symlinks are
/// not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new local filesystem collaborator.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFs {
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, WalkError> {
        let mut reader = tokio::fs::read_dir(path)
            .await
            .map_err(|e| WalkError::io(path, e))?;

        let mut entries = Vec::new();
        while let Some(dirent) = reader
            .next_entry()
            .await
            .map_err(|e| WalkError::io(path, e))?
        {
            let name = dirent.file_name().to_string_lossy().into_owned();
            // file_type() does not traverse symlinks, so links land in the
            // Other bucket rather than masquerading as their target.
            let file_type = dirent
                .file_type()
                .await
                .map_err(|e| WalkError::io(dirent.path(), e))?;

            let entry = if file_type.is_dir() {
                DirEntry::directory(name)
            } else if file_type.is_file() {
                let metadata = dirent
                    .metadata()
                    .await
                    .map_err(|e| WalkError::io(dirent.path(), e))?;
                DirEntry::file(name, metadata.len())
            } else {
                DirEntry::other(name)
            };
            entries.push(entry);
        }

        Ok(entries)
    }
}

//! Error types for walk operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while walking a tree.
///
/// There is a single failure category: a directory listing failed. The
/// variants preserve the `std::io::ErrorKind` distinctions a filesystem
/// collaborator typically reports, with the failing path attached.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Permission denied for a path.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Listing was attempted on something that is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the failing listing was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}

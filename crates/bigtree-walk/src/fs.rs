//! Filesystem collaborator interface.

use std::path::Path;

use bigtree_core::{DirEntry, WalkError};

/// Directory listing capability consumed by the walker.
///
/// The walker performs exactly one `read_dir` call per directory node and
/// suspends nowhere else. Entries are processed in the order the
/// implementation returns them; the walker never sorts or reorders, so a
/// deterministic walk requires a collaborator with a deterministic
/// listing order.
#[allow(async_fn_in_trait)]
pub trait Filesystem {
    /// List the entries of the directory at `path`.
    ///
    /// A failure here fails the walk of the whole subtree rooted at
    /// `path`; the walker passes the error through unmodified.
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, WalkError>;
}

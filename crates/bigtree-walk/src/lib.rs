//! Tree traversal engine for bigtree.
//!
//! This crate walks a directory tree through an injected [`Filesystem`]
//! collaborator, invoking a caller-supplied [`Visitor`] once per
//! discovered child. Key properties:
//!
//! - **One listing per directory** - `read_dir` is the walk's sole
//!   suspension point
//! - **Strict sibling ordering** - a child's full subtree completes
//!   before the next sibling is visited
//! - **Injected filesystem** - local disk ([`LocalFs`]), in-memory
//!   ([`MemoryFs`]), or anything else implementing [`Filesystem`]
//!
//! # Example
//!
//! ```rust,no_run
//! use bigtree_walk::{LocalFs, Node, Walker};
//!
//! # async fn run() -> Result<(), bigtree_walk::WalkError> {
//! let walker = Walker::new(LocalFs::new());
//!
//! let mut files = 0u64;
//! let mut count = |_parent: &Node, child: &Node| {
//!     if child.is_file() {
//!         files += 1;
//!     }
//! };
//! walker.walk("/var/log", &mut count).await?;
//!
//! println!("{files} files");
//! # Ok(())
//! # }
//! ```
//!
//! # Materialized trees
//!
//! To capture the tree shape instead of visiting it, use
//! [`Walker::walk_to_tree`]: directories become nested mappings, files
//! their human-readable size:
//!
//! ```rust,no_run
//! use bigtree_walk::{LocalFs, Walker};
//!
//! # async fn run() -> Result<(), bigtree_walk::WalkError> {
//! let walker = Walker::new(LocalFs::new());
//! let tree = walker.walk_to_tree("/etc/nginx").await?;
//! for name in tree.keys() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

mod fs;
mod local;
mod memory;
mod sink;
mod walker;

pub use fs::Filesystem;
pub use local::LocalFs;
pub use memory::MemoryFs;
pub use sink::{TreeEntry, TreeMap, TreeSink};
pub use walker::{Visitor, Walker};

// Re-export core types for convenience
pub use bigtree_core::{DirEntry, Node, NodeKey, NodeKind, WalkError};

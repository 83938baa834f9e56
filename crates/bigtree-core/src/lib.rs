//! Core types and traits for bigtree.
//!
//! This crate provides the fundamental data structures used throughout
//! the bigtree crates: walk nodes and keys, directory entries, running
//! size totals, and the walk error type.

mod error;
mod node;
mod size;
mod totals;

pub use error::WalkError;
pub use node::{DirEntry, Node, NodeKey, NodeKind};
pub use size::format_size;
pub use totals::SizeTotals;

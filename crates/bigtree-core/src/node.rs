//! Walk node and directory entry types.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::size::format_size;

/// Ordered path segments addressing a node relative to the walk root.
///
/// The root key is empty; a child's key is its parent's key joined with
/// the child's own name. Keys address positions in a materialized output
/// tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey(Vec<CompactString>);

impl NodeKey {
    /// The empty key of a walk root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Check whether this is the root key.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Key of a child named `name` under this key.
    pub fn join(&self, name: impl Into<CompactString>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Path segments from the walk root, in order.
    pub fn segments(&self) -> &[CompactString] {
        &self.0
    }

    /// Number of segments (0 for the root).
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// Type of file system node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file.
    File {
        /// Size in bytes.
        size: u64,
    },
    /// Directory.
    Directory,
    /// Other file types (symlinks, sockets, devices). Visited but never
    /// descended into.
    Other,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File { .. })
    }

    /// Size in bytes for files.
    pub fn size(&self) -> Option<u64> {
        match self {
            NodeKind::File { size } => Some(*size),
            _ => None,
        }
    }
}

/// One directory entry as reported by a filesystem collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name (not full path).
    pub name: CompactString,
    /// Entry type and size metadata.
    pub kind: NodeKind,
}

impl DirEntry {
    /// Create a file entry.
    pub fn file(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File { size },
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
        }
    }

    /// Create an entry for a node that is neither file nor directory.
    pub fn other(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Other,
        }
    }
}

/// A single filesystem entry encountered during a walk.
///
/// Nodes are ephemeral: the walker creates one per discovered entry,
/// hands it to the visitor, and discards it once the entry's subtree has
/// been processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Path segments from the walk root.
    pub key: NodeKey,

    /// Entry name. The synthetic root is named `/`.
    pub name: CompactString,

    /// Full filesystem path.
    pub path: PathBuf,

    /// Node type and size metadata.
    pub kind: NodeKind,
}

impl Node {
    /// Synthetic root node for a walk starting at `path`.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self {
            key: NodeKey::root(),
            name: "/".into(),
            path: path.into(),
            kind: NodeKind::Directory,
        }
    }

    /// Node for `entry` discovered under `parent`.
    pub fn child_of(parent: &Node, entry: &DirEntry) -> Self {
        Self {
            key: parent.key.join(entry.name.clone()),
            name: entry.name.clone(),
            path: parent.path.join(entry.name.as_str()),
            kind: entry.kind,
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Size in bytes for files.
    pub fn size(&self) -> Option<u64> {
        self.kind.size()
    }

    /// Human-readable size for files.
    pub fn human_size(&self) -> Option<String> {
        self.size().map(format_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let node = Node::root("/data");
        assert!(node.key.is_root());
        assert_eq!(node.name, "/");
        assert_eq!(node.path, PathBuf::from("/data"));
        assert!(node.is_dir());
    }

    #[test]
    fn test_child_key_extends_parent() {
        let root = Node::root("/data");
        let dir = Node::child_of(&root, &DirEntry::directory("sub"));
        let file = Node::child_of(&dir, &DirEntry::file("a.txt", 12));

        assert_eq!(dir.key.segments(), ["sub"]);
        assert_eq!(file.key.segments(), ["sub", "a.txt"]);
        assert_eq!(file.key.depth(), 2);
        assert_eq!(file.path, PathBuf::from("/data/sub/a.txt"));
    }

    #[test]
    fn test_node_kind_predicates() {
        assert!(NodeKind::Directory.is_dir());
        assert!(!NodeKind::Directory.is_file());
        assert!(NodeKind::File { size: 1 }.is_file());
        assert!(!NodeKind::Other.is_dir());
        assert!(!NodeKind::Other.is_file());
    }

    #[test]
    fn test_file_size_and_human_size() {
        let root = Node::root("/data");
        let file = Node::child_of(&root, &DirEntry::file("a.bin", 500));
        assert_eq!(file.size(), Some(500));
        assert_eq!(file.human_size().as_deref(), Some("500 B"));

        let dir = Node::child_of(&root, &DirEntry::directory("sub"));
        assert_eq!(dir.size(), None);
        assert_eq!(dir.human_size(), None);
    }
}

//! Materializing walks into nested mappings.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;

use bigtree_core::{Node, NodeKey, format_size};

use crate::walker::Visitor;

/// Nested mapping produced by a materializing walk, in listing order.
pub type TreeMap = IndexMap<CompactString, TreeEntry>;

/// One entry in a materialized tree.
///
/// Serializes untagged: directories as JSON objects, files as their
/// human-readable size string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeEntry {
    /// Non-directory entry, rendered as its human-readable size.
    File(CompactString),
    /// Directory entry with its children.
    Directory(TreeMap),
}

impl TreeEntry {
    /// The nested mapping, for directory entries.
    pub fn as_dir(&self) -> Option<&TreeMap> {
        match self {
            TreeEntry::Directory(map) => Some(map),
            TreeEntry::File(_) => None,
        }
    }

    /// The rendered size, for non-directory entries.
    pub fn as_size(&self) -> Option<&str> {
        match self {
            TreeEntry::File(size) => Some(size),
            TreeEntry::Directory(_) => None,
        }
    }
}

/// Visitor that writes each discovered child into a nested mapping at
/// the position addressed by its parent's key.
#[derive(Debug, Default)]
pub struct TreeSink {
    root: TreeMap,
}

impl TreeSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the sink, returning the materialized tree.
    pub fn into_tree(self) -> TreeMap {
        self.root
    }

    /// The materialized tree so far.
    pub fn tree(&self) -> &TreeMap {
        &self.root
    }

    fn map_at(&mut self, key: &NodeKey) -> &mut TreeMap {
        let mut map = &mut self.root;
        for segment in key.segments() {
            let entry = map
                .entry(segment.clone())
                .or_insert_with(|| TreeEntry::Directory(TreeMap::new()));
            if matches!(entry, TreeEntry::File(_)) {
                // A parent key always addresses a directory; if the name
                // was previously recorded as a file, the directory wins.
                *entry = TreeEntry::Directory(TreeMap::new());
            }
            map = match entry {
                TreeEntry::Directory(children) => children,
                TreeEntry::File(_) => unreachable!("replaced with directory above"),
            };
        }
        map
    }
}

impl Visitor for TreeSink {
    fn visit(&mut self, parent: &Node, child: &Node) {
        let entry = if child.is_dir() {
            TreeEntry::Directory(TreeMap::new())
        } else {
            TreeEntry::File(format_size(child.size().unwrap_or(0)).into())
        };
        self.map_at(&parent.key).insert(child.name.clone(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigtree_core::DirEntry;

    #[test]
    fn test_sink_nests_by_parent_key() {
        let root = Node::root("/a");
        let dir = Node::child_of(&root, &DirEntry::directory("d1"));
        let file = Node::child_of(&dir, &DirEntry::file("f2", 600));

        let mut sink = TreeSink::new();
        sink.visit(&root, &dir);
        sink.visit(&dir, &file);

        let tree = sink.into_tree();
        let nested = tree["d1"].as_dir().unwrap();
        assert_eq!(nested["f2"].as_size(), Some("600 B"));
    }

    #[test]
    fn test_entries_serialize_untagged() {
        let root = Node::root("/a");
        let mut sink = TreeSink::new();
        sink.visit(&root, &Node::child_of(&root, &DirEntry::file("f1", 500)));
        sink.visit(&root, &Node::child_of(&root, &DirEntry::directory("d1")));

        let json = serde_json::to_value(sink.tree()).unwrap();
        assert_eq!(json, serde_json::json!({"f1": "500 B", "d1": {}}));
    }
}

use std::path::{Path, PathBuf};

use bigtree_core::{DirEntry, Node, NodeKey, NodeKind, SizeTotals, WalkError, format_size};

#[test]
fn test_key_join_does_not_mutate_parent() {
    let root = NodeKey::root();
    let child = root.join("sub");
    let grandchild = child.join("a.txt");

    assert!(root.is_root());
    assert_eq!(child.segments(), ["sub"]);
    assert_eq!(grandchild.segments(), ["sub", "a.txt"]);
}

#[test]
fn test_node_construction_chain() {
    let root = Node::root("/srv/data");
    assert_eq!(root.name, "/");
    assert!(root.key.is_root());

    let dir = Node::child_of(&root, &DirEntry::directory("logs"));
    let file = Node::child_of(&dir, &DirEntry::file("app.log", 2048));

    assert_eq!(file.path, PathBuf::from("/srv/data/logs/app.log"));
    assert_eq!(file.key.segments(), ["logs", "app.log"]);
    assert_eq!(file.size(), Some(2048));
    assert_eq!(file.human_size().as_deref(), Some("2 KiB"));
}

#[test]
fn test_other_entries_have_no_size() {
    let root = Node::root("/dev");
    let node = Node::child_of(&root, &DirEntry::other("null"));
    assert_eq!(node.kind, NodeKind::Other);
    assert_eq!(node.size(), None);
    assert!(!node.is_dir());
    assert!(!node.is_file());
}

#[test]
fn test_totals_never_decrease() {
    let mut totals = SizeTotals::new();
    let mut last = 0;
    for size in [10, 0, 300, 0, 7] {
        totals.record(size);
        assert!(totals.total() >= last);
        last = totals.total();
    }
    assert_eq!(totals.total(), 317);
    assert_eq!(totals.human(), format_size(317));
}

#[test]
fn test_walk_error_round_trips_collaborator_detail() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = WalkError::io("/secret", source);

    assert_eq!(err.path(), Path::new("/secret"));
    let rendered = err.to_string();
    assert!(rendered.contains("permission denied"));
    assert!(rendered.contains("/secret"));
}

#[test]
fn test_totals_serialize_with_consistent_rendering() {
    let mut totals = SizeTotals::new();
    totals.record(1100);

    let json = serde_json::to_value(&totals).unwrap();
    assert_eq!(json["total"], 1100);
    assert_eq!(json["human"], format_size(1100));
}

//! Size-aggregating visitor.

use bigtree_core::{Node, SizeTotals};
use bigtree_walk::Visitor;

/// Visitor accumulating file sizes into a [`SizeTotals`].
///
/// Directory children are no-ops for aggregation (the walk still
/// descends into them), as are entries that are neither file nor
/// directory. Nothing here prevents double counting a child visited
/// twice; the walker's single-traversal guarantee is what makes the
/// result a sum over distinct files.
#[derive(Debug, Default)]
pub struct SizeAggregator {
    totals: SizeTotals,
}

impl SizeAggregator {
    /// Create an aggregator with fresh totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// The totals accumulated so far.
    pub fn totals(&self) -> &SizeTotals {
        &self.totals
    }

    /// Consume the aggregator, returning the totals.
    pub fn into_totals(self) -> SizeTotals {
        self.totals
    }
}

impl Visitor for SizeAggregator {
    fn visit(&mut self, _parent: &Node, child: &Node) {
        if let Some(size) = child.size() {
            self.totals.record(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigtree_core::DirEntry;

    #[test]
    fn test_files_accumulate() {
        let root = Node::root("/a");
        let mut aggregator = SizeAggregator::new();

        aggregator.visit(&root, &Node::child_of(&root, &DirEntry::file("f1", 500)));
        aggregator.visit(&root, &Node::child_of(&root, &DirEntry::file("f2", 600)));

        assert_eq!(aggregator.totals().total(), 1100);
    }

    #[test]
    fn test_directories_and_others_are_ignored() {
        let root = Node::root("/a");
        let mut aggregator = SizeAggregator::new();

        aggregator.visit(&root, &Node::child_of(&root, &DirEntry::directory("d1")));
        aggregator.visit(&root, &Node::child_of(&root, &DirEntry::other("sock")));

        assert_eq!(aggregator.into_totals().total(), 0);
    }
}

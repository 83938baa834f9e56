//! Unconditional tree dumps.

use std::path::Path;

use bigtree_core::WalkError;
use bigtree_walk::{Filesystem, TreeMap, Walker};

use crate::reporter::Reporter;

/// Walks a tree, materializes the full nested listing, and hands it to
/// the reporter.
pub struct TreeDumper<F, R> {
    walker: Walker<F>,
    reporter: R,
}

impl<F: Filesystem, R: Reporter> TreeDumper<F, R> {
    /// Create a dumper over `fs` reporting through `reporter`.
    pub fn new(fs: F, reporter: R) -> Self {
        Self {
            walker: Walker::new(fs),
            reporter,
        }
    }

    /// Consume the dumper, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Walk `path`, report the resulting listing, and return it.
    ///
    /// The listing is reported unconditionally; on a walk failure
    /// nothing is reported and the partial listing is discarded.
    pub async fn dump(&mut self, path: impl AsRef<Path>) -> Result<TreeMap, WalkError> {
        let path = path.as_ref();
        let tree = self.walker.walk_to_tree(path).await?;
        self.reporter.tree_listing(path, &tree);
        Ok(tree)
    }
}

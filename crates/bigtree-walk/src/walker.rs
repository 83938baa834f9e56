//! Ordered asynchronous recursive descent.

use std::path::Path;

use bigtree_core::{Node, WalkError};

use crate::fs::Filesystem;
use crate::sink::{TreeMap, TreeSink};

/// Caller-supplied visitation capability.
///
/// Invoked once per discovered child, synchronously, before the child
/// (if a directory) is itself walked. Closures of shape
/// `FnMut(&Node, &Node)` implement this directly.
pub trait Visitor {
    /// Observe `child`, just discovered under `parent`.
    fn visit(&mut self, parent: &Node, child: &Node);
}

impl<F: FnMut(&Node, &Node)> Visitor for F {
    fn visit(&mut self, parent: &Node, child: &Node) {
        self(parent, child)
    }
}

/// Recursive tree walker over an injected [`Filesystem`].
///
/// Children of one parent are processed strictly sequentially in listing
/// order: the visitor runs for child N, then child N's entire subtree
/// completes, and only then is child N+1 visited. This makes visitation
/// a deterministic sequence per directory (given a deterministic
/// collaborator) and bounds in-flight listings to one per tree depth
/// along the current path.
///
/// A listing failure anywhere aborts the whole walk; siblings scheduled
/// after the failure point are never visited, and visitor side effects
/// from before it are retained.
#[derive(Debug)]
pub struct Walker<F> {
    fs: F,
}

impl<F: Filesystem> Walker<F> {
    /// Create a walker over the given filesystem collaborator.
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Access the underlying filesystem collaborator.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Walk the tree rooted at `path`, invoking `visitor` per child.
    ///
    /// The root itself is represented by a synthetic [`Node`] with an
    /// empty key and the name `/`; it is the `parent` of the first layer
    /// of visits and is never visited itself.
    pub async fn walk<V: Visitor>(
        &self,
        path: impl AsRef<Path>,
        visitor: &mut V,
    ) -> Result<(), WalkError> {
        let root = Node::root(path.as_ref());
        self.walk_from(&root, visitor).await
    }

    /// Walk the subtree under an already constructed node.
    pub async fn walk_from<V: Visitor>(
        &self,
        parent: &Node,
        visitor: &mut V,
    ) -> Result<(), WalkError> {
        let entries = self.fs.read_dir(&parent.path).await?;
        for entry in &entries {
            let child = Node::child_of(parent, entry);
            visitor.visit(parent, &child);
            if child.is_dir() {
                Box::pin(self.walk_from(&child, visitor)).await?;
            }
        }
        Ok(())
    }

    /// Walk `path` and materialize the visitation as a nested mapping:
    /// directories become nested maps, everything else its human-readable
    /// size. See [`TreeSink`].
    pub async fn walk_to_tree(&self, path: impl AsRef<Path>) -> Result<TreeMap, WalkError> {
        let mut sink = TreeSink::new();
        self.walk(path, &mut sink).await?;
        Ok(sink.into_tree())
    }
}

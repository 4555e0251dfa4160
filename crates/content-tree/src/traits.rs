//! Core tree traits for path-addressed content stores

use crate::content::Content;
use crate::error::{Result, TreeError};
use crate::node::Node;
use crate::path::NodePath;

/// Read access to a hierarchical, path-addressed content store
///
/// This trait is the boundary between navigation and storage. Implementors
/// only resolve single paths; the derived methods build parent/child lookups
/// on top of that.
///
/// Lookups are expected to reflect the store at call time. Navigation never
/// caches nodes between calls.
///
/// # Example
///
/// ```ignore
/// fn print_children<T: ContentTree>(tree: &T, path: &NodePath) -> Result<()> {
///     let node = tree.node(path)?;
///     for name in &node.children {
///         println!("{}", node.child_path(name)?);
///     }
///     Ok(())
/// }
/// ```
pub trait ContentTree {
    /// Content stored at each node
    type Data: Content;

    /// Resolve a node by path
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if nothing exists at `path`.
    fn node(&self, path: &NodePath) -> Result<Node<Self::Data>>;

    /// Get the root node
    fn root(&self) -> Result<Node<Self::Data>> {
        self.node(&NodePath::root())
    }

    /// Get the parent of a node
    ///
    /// Fails with [`TreeError::RootHasNoParent`] for the root.
    fn parent(&self, node: &Node<Self::Data>) -> Result<Node<Self::Data>> {
        let parent = node.path.parent().ok_or(TreeError::RootHasNoParent)?;
        self.node(&parent)
    }

    /// Get a named child of a node
    fn child(&self, node: &Node<Self::Data>, name: &str) -> Result<Node<Self::Data>> {
        self.node(&node.child_path(name)?)
    }

    /// Check whether a node exists
    ///
    /// Errors other than "not found" are propagated.
    fn exists(&self, path: &NodePath) -> Result<bool> {
        match self.node(path) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<T: ContentTree + ?Sized> ContentTree for &T {
    type Data = T::Data;

    fn node(&self, path: &NodePath) -> Result<Node<Self::Data>> {
        (**self).node(path)
    }
}

/// Extension trait providing document-order walks
///
/// This trait is automatically implemented for all types that implement
/// `ContentTree`.
pub trait TreeTraversal: ContentTree {
    /// Walk the subtree at `start` in document order (pre-order)
    fn walk(&self, start: &NodePath) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start.clone(), None)
    }

    /// Walk the subtree at `start`, at most `max_depth` levels below it
    fn walk_to_depth(&self, start: &NodePath, max_depth: Option<usize>) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start.clone(), max_depth)
    }
}

// Blanket implementation for all ContentTree types
impl<T: ContentTree> TreeTraversal for T {}

/// Iterator over a subtree in document order
///
/// Yields the start node first, then each child subtree in stored order.
/// The first lookup error is yielded and ends the walk.
pub struct TreeWalker<'a, T: ContentTree + ?Sized> {
    tree: &'a T,
    max_depth: Option<usize>,
    stack: Vec<(NodePath, usize)>,
    failed: bool,
}

impl<'a, T: ContentTree + ?Sized> TreeWalker<'a, T> {
    /// Create a new walker starting from the given path
    pub fn new(tree: &'a T, start: NodePath, max_depth: Option<usize>) -> Self {
        Self {
            tree,
            max_depth,
            stack: vec![(start, 0)],
            failed: false,
        }
    }
}

impl<'a, T: ContentTree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = Result<Node<T::Data>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (path, level) = self.stack.pop()?;

        let node = match self.tree.node(&path) {
            Ok(node) => node,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        if self.max_depth.map_or(true, |max| level < max) {
            // Push in reverse so the first child is popped first
            for name in node.children.iter().rev() {
                match node.child_path(name) {
                    Ok(child) => self.stack.push((child, level + 1)),
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                }
            }
        }

        Some(Ok(node))
    }
}

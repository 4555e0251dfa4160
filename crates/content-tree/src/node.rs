//! Core node types for the content tree

use crate::error::Result;
use crate::path::NodePath;
use derive_more::Display;

/// The type/kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A container node - has or may have children (e.g., directory)
    #[display(fmt = "Container")]
    Container,
    /// A leaf node - has no children (e.g., file)
    #[display(fmt = "Leaf")]
    Leaf,
}

impl NodeKind {
    /// Returns true if this is a container node
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Container)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

/// A snapshot of one node, as read from a [`ContentTree`](crate::ContentTree)
///
/// Nodes are plain values: they are built on every lookup and hold the
/// ordered names of their children rather than references into the store.
/// The order of `children` is the document order of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<D> {
    /// Where this node lives
    pub path: NodePath,
    /// Whether this is a container or leaf node
    pub kind: NodeKind,
    /// Child names in stored order
    pub children: Vec<String>,
    /// User-defined content associated with this node
    pub data: D,
}

impl<D> Node<D> {
    /// Create a new node
    pub fn new(path: NodePath, kind: NodeKind, children: Vec<String>, data: D) -> Self {
        Self {
            path,
            kind,
            children,
            data,
        }
    }

    /// The node's name (empty for the root)
    pub fn name(&self) -> &str {
        self.path.name().unwrap_or("")
    }

    /// Depth of the node (root = 0)
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Returns true for the root node
    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }

    /// Returns true if the node has at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Position of a child name in the stored order
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|child| child == name)
    }

    /// Path of the named child
    pub fn child_path(&self, name: &str) -> Result<NodePath> {
        self.path.join(name)
    }

    /// Map the node's data, keeping its identity and hierarchy
    pub fn map<E>(self, f: impl FnOnce(D) -> E) -> Node<E> {
        Node {
            path: self.path,
            kind: self.kind,
            children: self.children,
            data: f(self.data),
        }
    }
}

//! In-memory content tree
//!
//! Keeps every node in a map keyed by path, with children in insertion
//! order. Useful for fixtures, tests and small generated sites.

use crate::content::Content;
use crate::error::{Result, TreeError};
use crate::node::{Node, NodeKind};
use crate::path::NodePath;
use crate::traits::ContentTree;
use std::collections::HashMap;

/// Internal node storage
#[derive(Debug, Clone)]
struct Entry<D> {
    /// The node data
    data: D,
    /// Child names in insertion order
    children: Vec<String>,
}

/// An ordered, in-memory content tree
///
/// # Example
///
/// ```
/// use content_tree::prelude::*;
///
/// let mut tree = MemoryTree::new();
/// tree.insert("/docs/intro", Page::new().with_routes(1)).unwrap();
/// tree.insert("/docs/install", Page::new()).unwrap();
///
/// let docs = tree.node(&NodePath::parse("/docs").unwrap()).unwrap();
/// assert_eq!(docs.children, vec!["intro", "install"]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryTree<D> {
    entries: HashMap<NodePath, Entry<D>>,
}

impl<D: Default> Default for MemoryTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Default> MemoryTree<D> {
    /// Create a tree holding only the root
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            NodePath::root(),
            Entry {
                data: D::default(),
                children: Vec::new(),
            },
        );
        Self { entries }
    }

    /// Build a tree from paths, all with default data
    ///
    /// Paths are inserted in the given order, which becomes the document order.
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path, D::default())?;
        }
        Ok(tree)
    }

    /// Insert or replace the node at `path`
    ///
    /// Missing ancestors are created with default data. A new node is
    /// appended after its existing siblings; replacing a node keeps its
    /// position and children.
    pub fn insert(&mut self, path: impl AsRef<str>, data: D) -> Result<NodePath> {
        let path = NodePath::parse(path.as_ref())?;
        self.insert_at(path.clone(), data);
        Ok(path)
    }

    fn insert_at(&mut self, path: NodePath, data: D) {
        if let Some(entry) = self.entries.get_mut(&path) {
            entry.data = data;
            return;
        }

        if let Some(parent) = path.parent() {
            if !self.entries.contains_key(&parent) {
                self.insert_at(parent.clone(), D::default());
            }
            if let (Some(entry), Some(name)) = (self.entries.get_mut(&parent), path.name()) {
                entry.children.push(name.to_string());
            }
        }

        self.entries.insert(
            path,
            Entry {
                data,
                children: Vec::new(),
            },
        );
    }
}

impl<D> MemoryTree<D> {
    /// Remove a node and its whole subtree
    ///
    /// Returns the number of removed nodes. The root cannot be removed.
    pub fn remove(&mut self, path: &NodePath) -> Result<usize> {
        let parent = path.parent().ok_or(TreeError::RootHasNoParent)?;
        if !self.entries.contains_key(path) {
            return Err(TreeError::NotFound { path: path.clone() });
        }

        if let (Some(entry), Some(name)) = (self.entries.get_mut(&parent), path.name()) {
            entry.children.retain(|child| child != name);
        }

        let before = self.entries.len();
        self.entries.retain(|candidate, _| !candidate.starts_with(path));
        Ok(before - self.entries.len())
    }

    /// Number of nodes, including the root
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the root is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: Content + Clone> ContentTree for MemoryTree<D> {
    type Data = D;

    fn node(&self, path: &NodePath) -> Result<Node<D>> {
        let entry = self
            .entries
            .get(path)
            .ok_or_else(|| TreeError::NotFound { path: path.clone() })?;

        let kind = if entry.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Container
        };

        Ok(Node::new(
            path.clone(),
            kind,
            entry.children.clone(),
            entry.data.clone(),
        ))
    }
}

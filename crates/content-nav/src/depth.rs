//! Anchor-bounded document-order search
//!
//! The anchor subtree is treated as one flattened document. Searches never
//! leave it, and subtrees more than `limit` levels below the anchor are not
//! expanded.
//!
//! Previous and next are deliberately not mirror images. Previous expands
//! every preceding sibling's subtree (rightmost first) before looking at the
//! siblings themselves and then at the parent's preceding siblings. Next only
//! looks at the start node's own children before moving on to following
//! siblings and then up through the ancestors.

use crate::eligibility::{split_siblings, Search};
use crate::error::{NavError, Result};
use content_tree::{ContentTree, Node, NodePath};
use log::trace;

/// True if nodes at `path` may be expanded under the depth budget
fn within_budget(path: &NodePath, anchor: &NodePath, limit: Option<usize>) -> bool {
    match (path.depth_below(anchor), limit) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(depth), Some(limit)) => depth < limit,
    }
}

fn check_anchor(start: &NodePath, anchor: &NodePath) -> Result<()> {
    if start.starts_with(anchor) {
        Ok(())
    } else {
        Err(NavError::NotWithinAnchor {
            path: start.clone(),
            anchor: anchor.clone(),
        })
    }
}

impl<'a, T: ContentTree> Search<'a, T> {
    /// Previous candidate of `start` in the flattened anchor subtree
    pub(crate) fn depth_prev(
        &self,
        start: &NodePath,
        anchor: &NodePath,
        limit: Option<usize>,
    ) -> Result<Option<Node<T::Data>>> {
        check_anchor(start, anchor)?;
        if start == anchor {
            return Ok(None);
        }

        let node = self.tree.node(start)?;
        let parent = self.tree.parent(&node)?;
        let (preceding, _) = split_siblings(&parent, node.name())?;

        if !preceding.is_empty() {
            if let Some(found) = self.expand_prev(&parent.path, preceding, anchor, limit)? {
                return Ok(Some(found));
            }
            if let Some(found) = self.first_candidate(&parent.path, preceding.iter().rev())? {
                return Ok(Some(found));
            }
        }

        if parent.path != *anchor && parent.path.starts_with(anchor) {
            let grandparent = self.tree.parent(&parent)?;
            let (preceding, _) = split_siblings(&grandparent, parent.name())?;
            return self.first_candidate(&grandparent.path, preceding.iter().rev());
        }

        trace!("No previous node for {} within {}", start, anchor);
        Ok(None)
    }

    /// Walk the subtrees of `names` (children of `base`) rightmost first
    ///
    /// Each subtree is searched depth first before its own children are
    /// tested as candidates.
    fn expand_prev(
        &self,
        base: &NodePath,
        names: &[String],
        anchor: &NodePath,
        limit: Option<usize>,
    ) -> Result<Option<Node<T::Data>>> {
        for name in names.iter().rev() {
            if self.filter.is_structural(name) {
                continue;
            }
            let path = base.join(name)?;
            if !within_budget(&path, anchor, limit) {
                trace!("Depth budget blocks descent into {}", path);
                continue;
            }

            let node = self.tree.node(&path)?;
            if !node.has_children() {
                continue;
            }
            if let Some(found) = self.expand_prev(&node.path, &node.children, anchor, limit)? {
                return Ok(Some(found));
            }
            if let Some(found) = self.first_candidate(&node.path, node.children.iter().rev())? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Next candidate of `start` in the flattened anchor subtree
    pub(crate) fn depth_next(
        &self,
        start: &NodePath,
        anchor: &NodePath,
        limit: Option<usize>,
    ) -> Result<Option<Node<T::Data>>> {
        check_anchor(start, anchor)?;

        let node = self.tree.node(start)?;
        if within_budget(start, anchor, limit) {
            if let Some(found) = self.first_candidate(&node.path, &node.children)? {
                return Ok(Some(found));
            }
        } else {
            trace!("Depth budget blocks descent into {}", start);
        }

        let mut current = node;
        while current.path != *anchor {
            let parent = self.tree.parent(&current)?;
            let (_, following) = split_siblings(&parent, current.name())?;
            if let Some(found) = self.first_candidate(&parent.path, following)? {
                return Ok(Some(found));
            }
            current = parent;
        }

        trace!("Ascent from {} stopped at anchor {}", start, anchor);
        Ok(None)
    }
}

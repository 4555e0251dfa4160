//! Candidate filtering
//!
//! A child is a candidate when its name is not structural, it passes the
//! type filter, and the access oracle (if asked) lets it be viewed.

use crate::access::{AccessOracle, RoleCheck};
use crate::error::{NavError, Result};
use content_tree::{Content, ContentTree, Node, NodePath, TreeError};
use log::trace;

/// The filter applied to every node a search looks at
#[derive(Clone, Copy)]
pub(crate) struct Eligibility<'a> {
    pub locale_prefix: &'a str,
    pub oracle: Option<&'a dyn AccessOracle>,
    pub role: RoleCheck,
    pub type_filter: Option<&'a str>,
}

impl<'a> Eligibility<'a> {
    /// Reserved child names (translations) that are never content
    pub fn is_structural(&self, name: &str) -> bool {
        name.starts_with(self.locale_prefix)
    }

    /// Access check for one node
    ///
    /// Fails when a check is requested but no oracle is configured.
    pub fn is_visible<D: Content>(&self, node: &Node<D>) -> Result<bool> {
        let Some(attribute) = self.role.attribute() else {
            return Ok(true);
        };
        let oracle = self
            .oracle
            .ok_or(NavError::MissingAccessOracle { attribute })?;
        Ok(oracle.is_granted(attribute, &node.path, &node.data))
    }

    /// Fail when an access check is requested but no oracle is configured
    ///
    /// Checked before a search starts, so the error does not depend on
    /// whether any node reaches the access check.
    pub fn check_configured(&self) -> Result<()> {
        match (self.role.attribute(), self.oracle) {
            (Some(attribute), None) => Err(NavError::MissingAccessOracle { attribute }),
            _ => Ok(()),
        }
    }

    /// Type filter for one node
    pub fn matches_type<D: Content>(&self, node: &Node<D>) -> bool {
        match self.type_filter {
            None => true,
            Some(wanted) => node.data.type_name() == Some(wanted),
        }
    }

    /// Full candidate test for an already loaded node
    pub fn accepts<D: Content>(&self, node: &Node<D>) -> Result<bool> {
        if self.is_structural(node.name()) {
            return Ok(false);
        }
        if !self.is_visible(node)? {
            trace!("Rejecting {}: not visible", node.path);
            return Ok(false);
        }
        let matches = self.matches_type(node);
        if !matches {
            trace!("Rejecting {}: type mismatch", node.path);
        }
        Ok(matches)
    }
}

/// A tree paired with the filter of one query
pub(crate) struct Search<'a, T: ContentTree> {
    pub tree: &'a T,
    pub filter: Eligibility<'a>,
}

impl<'a, T: ContentTree> Search<'a, T> {
    pub fn new(tree: &'a T, filter: Eligibility<'a>) -> Self {
        Self { tree, filter }
    }

    /// Load `parent/name` if it is a candidate
    pub fn candidate(&self, parent: &NodePath, name: &str) -> Result<Option<Node<T::Data>>> {
        if self.filter.is_structural(name) {
            trace!("Skipping structural child {} of {}", name, parent);
            return Ok(None);
        }
        let node = self.tree.node(&parent.join(name)?)?;
        Ok(self.filter.accepts(&node)?.then_some(node))
    }

    /// First candidate among `names`, in iteration order
    pub fn first_candidate<'n>(
        &self,
        parent: &NodePath,
        names: impl IntoIterator<Item = &'n String>,
    ) -> Result<Option<Node<T::Data>>> {
        for name in names {
            if let Some(node) = self.candidate(parent, name)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }
}

/// Split a parent's children around the named child
///
/// Returns the names before and after it, in stored order. A parent that
/// does not list the child means the store changed underneath us.
pub(crate) fn split_siblings<'n, D>(
    parent: &'n Node<D>,
    name: &str,
) -> Result<(&'n [String], &'n [String])> {
    let position = parent.position_of(name).ok_or_else(|| {
        let path = parent
            .child_path(name)
            .unwrap_or_else(|_| parent.path.clone());
        NavError::Tree(TreeError::NotFound { path })
    })?;
    Ok((
        &parent.children[..position],
        &parent.children[position + 1..],
    ))
}

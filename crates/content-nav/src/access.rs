//! Access checks
//!
//! Navigation asks an [`AccessOracle`] whether a node may be shown. Which
//! question it asks depends on the caller's [`RoleCheck`].

use content_tree::{Content, NodePath};
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The permission asked of an [`AccessOracle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessAttribute {
    /// Viewable by the current user, with whatever roles they hold
    #[display(fmt = "VIEW")]
    View,
    /// Viewable by an anonymous visitor
    #[display(fmt = "VIEW_ANONYMOUS")]
    ViewAnonymous,
}

/// How a query checks visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoleCheck {
    /// Do not check; the caller vouches for visibility
    #[default]
    Skip,
    /// Check [`AccessAttribute::View`]
    WithRole,
    /// Check [`AccessAttribute::ViewAnonymous`]
    Anonymous,
}

impl RoleCheck {
    /// The attribute to ask for, or `None` when the check is skipped
    pub fn attribute(self) -> Option<AccessAttribute> {
        match self {
            RoleCheck::Skip => None,
            RoleCheck::WithRole => Some(AccessAttribute::View),
            RoleCheck::Anonymous => Some(AccessAttribute::ViewAnonymous),
        }
    }
}

/// `None` skips the check, `Some(false)` checks with roles, `Some(true)`
/// checks anonymous access
impl From<Option<bool>> for RoleCheck {
    fn from(ignore_role: Option<bool>) -> Self {
        match ignore_role {
            None => RoleCheck::Skip,
            Some(false) => RoleCheck::WithRole,
            Some(true) => RoleCheck::Anonymous,
        }
    }
}

/// Decides whether a node may be shown
///
/// Implemented for closures, so simple policies need no type:
///
/// ```
/// use content_nav::{AccessAttribute, AccessOracle};
/// use content_tree::{Content, NodePath};
///
/// let public_only = |attribute: AccessAttribute, path: &NodePath, _: &dyn Content| {
///     attribute == AccessAttribute::View || !path.segments().any(|s| s == "private")
/// };
/// let path = NodePath::parse("/private/notes").unwrap();
/// assert!(!public_only.is_granted(AccessAttribute::ViewAnonymous, &path, &()));
/// ```
pub trait AccessOracle {
    /// Check `attribute` for the node at `path` holding `content`
    fn is_granted(&self, attribute: AccessAttribute, path: &NodePath, content: &dyn Content)
        -> bool;
}

impl<F> AccessOracle for F
where
    F: Fn(AccessAttribute, &NodePath, &dyn Content) -> bool,
{
    fn is_granted(
        &self,
        attribute: AccessAttribute,
        path: &NodePath,
        content: &dyn Content,
    ) -> bool {
        self(attribute, path, content)
    }
}

/// Grants access based on publication state
///
/// Anonymous visitors see published content only. Users with the bypass role
/// also see unpublished content when checked with [`AccessAttribute::View`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishWorkflowOracle {
    bypass: bool,
}

impl PublishWorkflowOracle {
    /// An oracle for a user without the bypass role
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle for a user allowed to preview unpublished content
    pub fn with_bypass() -> Self {
        Self { bypass: true }
    }
}

impl AccessOracle for PublishWorkflowOracle {
    fn is_granted(
        &self,
        attribute: AccessAttribute,
        _path: &NodePath,
        content: &dyn Content,
    ) -> bool {
        match attribute {
            AccessAttribute::View => self.bypass || content.is_published(),
            AccessAttribute::ViewAnonymous => content.is_published(),
        }
    }
}

//! Configuration and per-call query options.
//!
//! [`NavigatorOptions`] configures a [`Navigator`](crate::Navigator) once,
//! [`NavQuery`] and [`ListOptions`] describe a single previous/next or
//! child-listing call.

use crate::access::RoleCheck;
use content_tree::NodePath;
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix of child names that mark translations rather than content
pub const DEFAULT_LOCALE_PREFIX: &str = "phpcr_locale:";

/// Configuration options for a navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorOptions {
    /// Child names starting with this prefix are structural and never
    /// returned as candidates.
    pub locale_prefix: String,

    /// Maximum number of searches a linkable lookup may perform.
    /// `None` leaves the loop unbounded.
    pub max_steps: Option<usize>,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            locale_prefix: DEFAULT_LOCALE_PREFIX.to_string(),
            max_steps: None,
        }
    }
}

impl NavigatorOptions {
    /// Create new navigator options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the structural name prefix.
    pub fn locale_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.locale_prefix = prefix.into();
        self
    }

    /// Set the step budget for linkable lookups.
    pub fn max_steps(mut self, steps: Option<usize>) -> Self {
        self.max_steps = steps;
        self
    }
}

/// Search direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    /// Towards the start of the document
    #[display(fmt = "previous")]
    Backward,
    /// Towards the end of the document
    #[display(fmt = "next")]
    Forward,
}

/// Parameters of a single previous/next lookup.
///
/// Without an anchor the lookup only considers siblings of the start node.
/// With an anchor it walks the anchor's subtree in document order, expanding
/// at most `depth` levels below the anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavQuery {
    /// Subtree that bounds the search
    pub anchor: Option<NodePath>,

    /// Depth budget measured from the anchor. `None` means unlimited.
    pub depth: Option<usize>,

    /// Visibility check applied to candidates
    pub role: RoleCheck,

    /// Only return nodes of this type
    pub type_filter: Option<String>,
}

impl NavQuery {
    /// Create a sibling-only query without access checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the search by an anchor subtree.
    pub fn anchor(mut self, anchor: NodePath) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the depth budget.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the visibility check.
    pub fn role(mut self, role: RoleCheck) -> Self {
        self.role = role;
        self
    }

    /// Restrict results to one type.
    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_filter = Some(type_name.into());
        self
    }
}

/// Parameters of a child listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    /// Maximum number of children returned
    pub limit: Option<usize>,

    /// Name of the first child to include
    pub offset: Option<String>,

    /// Name pattern, `|`-separated globs
    pub filter: Option<String>,

    /// Visibility check applied to children
    pub role: RoleCheck,

    /// Only return children of this type
    pub type_filter: Option<String>,
}

impl ListOptions {
    /// List every eligible child.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start the listing at the named child.
    pub fn offset(mut self, name: impl Into<String>) -> Self {
        self.offset = Some(name.into());
        self
    }

    /// Only list children whose names match `pattern`.
    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter = Some(pattern.into());
        self
    }

    /// Set the visibility check.
    pub fn role(mut self, role: RoleCheck) -> Self {
        self.role = role;
        self
    }

    /// Restrict results to one type.
    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_filter = Some(type_name.into());
        self
    }
}

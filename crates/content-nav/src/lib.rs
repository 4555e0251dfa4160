//! Content Navigation Library
//!
//! Previous/next navigation over a [`ContentTree`](content_tree::ContentTree),
//! for building "previous page / next page" links and breadcrumb-style
//! menus from a hierarchical content store.
//!
//! # Core Concepts
//!
//! - **Sibling search**: without an anchor, look only at the start node's
//!   siblings
//! - **Depth search**: with an anchor, treat the anchor's subtree as one
//!   flattened document and never leave it
//! - **Eligibility**: structural translation children (`phpcr_locale:*`)
//!   are never returned; optional type and access filters narrow further
//! - **Linkable lookups**: repeat a search until the result has a route
//!
//! # Example
//!
//! ```
//! use content_nav::prelude::*;
//! use content_tree::{MemoryTree, NodePath, Page};
//!
//! let mut tree = MemoryTree::new();
//! tree.insert("/docs", Page::new()).unwrap();
//! tree.insert("/docs/intro", Page::new().with_routes(1)).unwrap();
//! tree.insert("/docs/setup", Page::new()).unwrap();
//! tree.insert("/docs/setup/linux", Page::new().with_routes(1)).unwrap();
//!
//! let navigator = Navigator::new(tree);
//! let docs = NodePath::parse("/docs").unwrap();
//! let intro = NodePath::parse("/docs/intro").unwrap();
//!
//! // Flattened document order below /docs
//! let query = NavQuery::new().anchor(docs);
//! let next = navigator.next(&intro, &query).unwrap().unwrap();
//! assert_eq!(next.path.to_string(), "/docs/setup");
//!
//! // /docs/setup has no route, so the next linkable page is its child
//! let next = navigator.next_linkable(&intro, &query).unwrap().unwrap();
//! assert_eq!(next.path.to_string(), "/docs/setup/linux");
//! ```

pub mod access;
mod depth;
mod eligibility;
mod error;
mod linkable;
mod listing;
mod navigator;
pub mod options;
mod sibling;

pub use access::{AccessAttribute, AccessOracle, PublishWorkflowOracle, RoleCheck};
pub use error::{NavError, Result};
pub use navigator::Navigator;
pub use options::{Direction, ListOptions, NavQuery, NavigatorOptions, DEFAULT_LOCALE_PREFIX};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AccessAttribute, AccessOracle, Direction, ListOptions, NavError, NavQuery, Navigator,
        NavigatorOptions, PublishWorkflowOracle, RoleCheck,
    };
}

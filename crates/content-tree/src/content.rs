//! Content attached to tree nodes
//!
//! Navigation needs three facts about a node's content beyond its position:
//! what type it is (for type filters), whether it can be linked to (route
//! associations), and whether it is published (for access checks).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata the navigation layer reads from node content
///
/// Every method has a default, so plain data types only override what they
/// actually know.
pub trait Content {
    /// Type name used by type filters, if the content has one
    fn type_name(&self) -> Option<&str> {
        None
    }

    /// Number of navigable routes pointing at this content
    fn route_count(&self) -> usize {
        0
    }

    /// True when the content is itself a route
    fn is_route(&self) -> bool {
        false
    }

    /// Publication state, as seen by access checks
    fn is_published(&self) -> bool {
        true
    }

    /// A node is linkable when it is a route or has at least one route
    fn is_linkable(&self) -> bool {
        self.is_route() || self.route_count() > 0
    }
}

impl Content for () {}

/// A general purpose content record
///
/// Used by in-memory trees and fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    /// Document type, matched by type filters
    pub type_name: Option<String>,
    /// Number of routes referring to this page
    pub routes: usize,
    /// Whether the page is a route itself
    pub route: bool,
    /// Publication state
    pub published: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            type_name: None,
            routes: 0,
            route: false,
            published: true,
        }
    }
}

impl Page {
    /// Create a published page without routes or type
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document type.
    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the number of routes.
    pub fn with_routes(mut self, routes: usize) -> Self {
        self.routes = routes;
        self
    }

    /// Mark the page as a route.
    pub fn as_route(mut self) -> Self {
        self.route = true;
        self
    }

    /// Mark the page as unpublished.
    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }
}

impl Content for Page {
    fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    fn route_count(&self) -> usize {
        self.routes
    }

    fn is_route(&self) -> bool {
        self.route
    }

    fn is_published(&self) -> bool {
        self.published
    }
}

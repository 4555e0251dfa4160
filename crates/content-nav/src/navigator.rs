//! The navigation entry point.

use crate::access::{AccessOracle, RoleCheck};
use crate::eligibility::{Eligibility, Search};
use crate::error::{NavError, Result};
use crate::linkable::Scope;
use crate::options::{Direction, ListOptions, NavQuery, NavigatorOptions};
use content_tree::{Content, ContentTree, Node, NodePath};
use log::debug;

/// Previous/next navigation over a content tree
///
/// The tree and the optional access oracle are fixed at construction. Every
/// call re-reads the nodes it needs from the tree.
///
/// # Example
///
/// ```
/// use content_nav::{NavQuery, Navigator};
/// use content_tree::{MemoryTree, NodePath, Page};
///
/// let tree: MemoryTree<Page> =
///     MemoryTree::from_paths(["/a/x", "/a/phpcr_locale:en", "/a/y"]).unwrap();
/// let navigator = Navigator::new(tree);
///
/// let x = NodePath::parse("/a/x").unwrap();
/// let next = navigator.next(&x, &NavQuery::new()).unwrap().unwrap();
/// assert_eq!(next.path.to_string(), "/a/y");
/// ```
pub struct Navigator<T> {
    tree: T,
    oracle: Option<Box<dyn AccessOracle>>,
    options: NavigatorOptions,
}

impl<T: ContentTree> Navigator<T> {
    /// Create a navigator without an access oracle
    ///
    /// Queries that ask for an access check fail with
    /// [`NavError::MissingAccessOracle`] until one is configured.
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            oracle: None,
            options: NavigatorOptions::default(),
        }
    }

    /// Use `oracle` for access checks
    pub fn with_access_oracle(mut self, oracle: impl AccessOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    /// Replace the navigator options
    pub fn with_options(mut self, options: NavigatorOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying tree
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// The active options
    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// A search for one query, failing early when its access check has no oracle
    fn search<'q>(
        &'q self,
        role: RoleCheck,
        type_filter: Option<&'q str>,
    ) -> Result<Search<'q, T>> {
        let filter = Eligibility {
            locale_prefix: &self.options.locale_prefix,
            oracle: self.oracle.as_deref(),
            role,
            type_filter,
        };
        filter.check_configured()?;
        Ok(Search::new(&self.tree, filter))
    }

    fn lookup(
        &self,
        start: &NodePath,
        query: &NavQuery,
        direction: Direction,
        linkable: bool,
    ) -> Result<Option<Node<T::Data>>> {
        debug!(
            "Looking up {}{} node of {} (anchor: {:?}, depth: {:?})",
            direction,
            if linkable { " linkable" } else { "" },
            start,
            query.anchor.as_ref().map(ToString::to_string),
            query.depth
        );

        let search = self.search(query.role, query.type_filter.as_deref())?;
        let scope = Scope {
            direction,
            anchor: query.anchor.as_ref(),
            depth: query.depth,
        };

        if linkable {
            search.linkable(start, scope, self.options.max_steps)
        } else {
            search.step(start, scope)
        }
    }

    /// The previous candidate before `start`
    ///
    /// With an anchor in `query` this is the previous node in the flattened
    /// anchor subtree, otherwise the previous eligible sibling.
    ///
    /// # Errors
    ///
    /// - [`NavError::NotWithinAnchor`] if `start` is outside the anchor
    /// - [`NavError::MissingAccessOracle`] if the query asks for an access
    ///   check and no oracle is configured
    /// - [`NavError::Tree`] if `start` does not exist or the store fails
    pub fn prev(&self, start: &NodePath, query: &NavQuery) -> Result<Option<Node<T::Data>>> {
        self.lookup(start, query, Direction::Backward, false)
    }

    /// The next candidate after `start`
    ///
    /// See [`Navigator::prev`] for the errors.
    pub fn next(&self, start: &NodePath, query: &NavQuery) -> Result<Option<Node<T::Data>>> {
        self.lookup(start, query, Direction::Forward, false)
    }

    /// The previous candidate that is linkable, skipping unlinkable ones
    ///
    /// Additionally fails with [`NavError::StepBudgetExhausted`] when
    /// [`NavigatorOptions::max_steps`] is set and exceeded.
    pub fn prev_linkable(
        &self,
        start: &NodePath,
        query: &NavQuery,
    ) -> Result<Option<Node<T::Data>>> {
        self.lookup(start, query, Direction::Backward, true)
    }

    /// The next candidate that is linkable, skipping unlinkable ones
    pub fn next_linkable(
        &self,
        start: &NodePath,
        query: &NavQuery,
    ) -> Result<Option<Node<T::Data>>> {
        self.lookup(start, query, Direction::Forward, true)
    }

    /// Look up a node, treating a missing node as no result
    pub fn find(&self, path: &NodePath) -> Result<Option<Node<T::Data>>> {
        match self.tree.node(path) {
            Ok(node) => Ok(Some(node)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(NavError::Tree(e)),
        }
    }

    /// Look up several nodes, keeping the eligible ones in input order
    ///
    /// Missing paths are skipped. Stops after `limit` nodes.
    pub fn find_many<'p>(
        &self,
        paths: impl IntoIterator<Item = &'p NodePath>,
        limit: Option<usize>,
        role: RoleCheck,
        type_filter: Option<&str>,
    ) -> Result<Vec<Node<T::Data>>> {
        let search = self.search(role, type_filter)?;
        let mut result = Vec::new();

        for path in paths {
            if limit.is_some_and(|limit| result.len() >= limit) {
                break;
            }
            let Some(node) = self.find(path)? else {
                continue;
            };
            if search.filter.accepts(&node)? {
                result.push(node);
            }
        }
        Ok(result)
    }

    /// Access check for a single node
    pub fn is_visible(&self, node: &Node<T::Data>, role: RoleCheck) -> Result<bool> {
        self.search(role, None)?.filter.is_visible(node)
    }

    /// True when the node has at least one route association
    pub fn is_linkable(&self, node: &Node<T::Data>) -> bool {
        node.data.is_linkable()
    }

    /// Eligible children of `parent` in stored order
    pub fn children(&self, parent: &NodePath, options: &ListOptions) -> Result<Vec<Node<T::Data>>> {
        self.search(options.role, options.type_filter.as_deref())?
            .children(parent, options, false)
    }

    /// Eligible, linkable children of `parent` in stored order
    pub fn linkable_children(
        &self,
        parent: &NodePath,
        options: &ListOptions,
    ) -> Result<Vec<Node<T::Data>>> {
        self.search(options.role, options.type_filter.as_deref())?
            .children(parent, options, true)
    }

    /// Paths below `parent` in document order, at most `depth` levels deep
    pub fn descendants(&self, parent: &NodePath, depth: Option<usize>) -> Result<Vec<NodePath>> {
        self.search(RoleCheck::Skip, None)?.descendants(parent, depth)
    }
}

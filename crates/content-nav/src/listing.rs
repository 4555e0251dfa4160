//! Child and descendant listings.

use crate::eligibility::Search;
use crate::error::{NavError, Result};
use crate::options::ListOptions;
use content_tree::{Content, ContentTree, Node, NodePath, TreeTraversal};
use glob::Pattern;

/// A `|`-separated list of glob patterns matched against child names
#[derive(Debug, Clone)]
pub(crate) struct NameFilter {
    patterns: Vec<Pattern>,
}

impl NameFilter {
    pub fn parse(filter: &str) -> Result<Self> {
        let patterns = filter
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                Pattern::new(part).map_err(|source| NavError::InvalidFilter {
                    pattern: filter.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }
}

impl<'a, T: ContentTree> Search<'a, T> {
    /// Eligible children of `parent`, in stored order
    pub(crate) fn children(
        &self,
        parent: &NodePath,
        options: &ListOptions,
        linkable_only: bool,
    ) -> Result<Vec<Node<T::Data>>> {
        let node = self.tree.node(parent)?;
        let name_filter = options
            .filter
            .as_deref()
            .map(NameFilter::parse)
            .transpose()?;

        let names: Vec<&String> = node
            .children
            .iter()
            .filter(|name| !self.filter.is_structural(name))
            .collect();

        let start = match &options.offset {
            None => 0,
            Some(offset) => match names.iter().position(|name| *name == offset) {
                Some(position) => position,
                None => return Ok(Vec::new()),
            },
        };

        let mut result = Vec::new();
        for name in &names[start..] {
            if options.limit.is_some_and(|limit| result.len() >= limit) {
                break;
            }
            if name_filter.as_ref().is_some_and(|f| !f.matches(name)) {
                continue;
            }
            let Some(child) = self.candidate(&node.path, name)? else {
                continue;
            };
            if linkable_only && !child.data.is_linkable() {
                continue;
            }
            result.push(child);
        }
        Ok(result)
    }

    /// Paths below `parent` in document order, at most `depth` levels deep
    ///
    /// Structural nodes are left out together with their subtrees.
    pub(crate) fn descendants(
        &self,
        parent: &NodePath,
        depth: Option<usize>,
    ) -> Result<Vec<NodePath>> {
        let mut walk = self.tree.walk_to_depth(parent, depth);
        // the walk starts with `parent` itself
        if let Some(start) = walk.next() {
            start?;
        }

        let mut result = Vec::new();
        for node in walk {
            let path = node?.path;
            let structural = path
                .segments()
                .skip(parent.depth())
                .any(|segment| self.filter.is_structural(segment));
            if !structural {
                result.push(path);
            }
        }
        Ok(result)
    }
}

//! Linkable lookups
//!
//! Repeats a previous/next search from each result until it finds a node
//! that can be linked to. Every step moves strictly forward (or backward) in
//! document order, so on a finite tree the loop ends; `max_steps` bounds it
//! further when set.

use crate::eligibility::Search;
use crate::error::{NavError, Result};
use crate::options::Direction;
use content_tree::{Content, ContentTree, Node, NodePath};
use log::{debug, trace};

/// Where one search step looks
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scope<'a> {
    pub direction: Direction,
    pub anchor: Option<&'a NodePath>,
    pub depth: Option<usize>,
}

impl<'a, T: ContentTree> Search<'a, T> {
    /// One previous/next step: depth search with an anchor, sibling search
    /// without
    pub(crate) fn step(&self, start: &NodePath, scope: Scope<'_>) -> Result<Option<Node<T::Data>>> {
        match (scope.anchor, scope.direction) {
            (Some(anchor), Direction::Backward) => self.depth_prev(start, anchor, scope.depth),
            (Some(anchor), Direction::Forward) => self.depth_next(start, anchor, scope.depth),
            (None, direction) => self.sibling(start, direction),
        }
    }

    /// Step until a linkable candidate turns up
    pub(crate) fn linkable(
        &self,
        start: &NodePath,
        scope: Scope<'_>,
        max_steps: Option<usize>,
    ) -> Result<Option<Node<T::Data>>> {
        let mut current = start.clone();
        let mut steps = 0;

        loop {
            if max_steps.is_some_and(|max| steps >= max) {
                return Err(NavError::StepBudgetExhausted { steps });
            }
            steps += 1;

            let Some(candidate) = self.step(&current, scope)? else {
                debug!(
                    "No linkable {} node for {} after {} steps",
                    scope.direction, start, steps
                );
                return Ok(None);
            };

            if candidate.data.is_linkable() {
                return Ok(Some(candidate));
            }

            trace!("{} is not linkable, continuing", candidate.path);
            current = candidate.path;
        }
    }
}

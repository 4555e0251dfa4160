//! Error types for navigation queries.

use crate::access::AccessAttribute;
use content_tree::{NodePath, TreeError};
use thiserror::Error;

/// Errors raised by navigation.
///
/// "No previous/next node" is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug)]
pub enum NavError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("the path '{path}' is not within the anchor '{anchor}'")]
    NotWithinAnchor { path: NodePath, anchor: NodePath },

    #[error("access check '{attribute}' requested but no access oracle is configured")]
    MissingAccessOracle { attribute: AccessAttribute },

    #[error("no linkable node found within {steps} steps")]
    StepBudgetExhausted { steps: usize },

    #[error("invalid name filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl NavError {
    /// True when the underlying store reported a missing node
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavError::Tree(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

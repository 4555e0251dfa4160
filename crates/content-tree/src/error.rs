//! Error types for content tree access.

use crate::path::NodePath;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a content tree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node not found: {path}")]
    NotFound { path: NodePath },

    #[error("the root node has no parent")]
    RootHasNoParent,

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// True when the error means "there is no node at this path"
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;

//! Content Tree Library
//!
//! Read access to hierarchical, path-addressed content stores. A store is
//! anything that can resolve a slash-separated path to a node with an ordered
//! list of child names.
//!
//! # Core Concepts
//!
//! - **NodePath**: Validated slash-separated node identifier
//! - **Node**: Snapshot of one node (path, kind, ordered child names, data)
//! - **Content**: Type, route and publication metadata navigation reads
//! - **ContentTree**: The accessor trait stores implement
//! - **MemoryTree** / **FilesystemTree**: In-memory and on-disk stores
//!
//! # Example
//!
//! ```no_run
//! use content_tree::prelude::*;
//!
//! let tree = FilesystemTree::new("./site").expect("Failed to open directory");
//!
//! // Walk the tree in document order
//! for node in tree.walk(&NodePath::root()) {
//!     let node = node.expect("Failed to read node");
//!     println!("{:indent$}{}", "", node.name(), indent = node.depth() * 2);
//! }
//! ```

mod content;
mod error;
pub mod filesystem;
pub mod memory;
mod node;
mod path;
mod traits;

pub use content::{Content, Page};
pub use error::{Result, TreeError};
pub use filesystem::{FileData, FilesystemTree};
pub use memory::MemoryTree;
pub use node::{Node, NodeKind};
pub use path::NodePath;
pub use traits::{ContentTree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::{
        Content, ContentTree, FileData, FilesystemTree, MemoryTree, Node, NodeKind, NodePath,
        Page, TreeError, TreeTraversal,
    };
}

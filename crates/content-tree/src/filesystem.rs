//! Filesystem-backed content tree
//!
//! Directories are containers, files are leaves. Every lookup reads the
//! directory from disk, so the tree always reflects the current state of the
//! filesystem.

use crate::content::Content;
use crate::error::{Result, TreeError};
use crate::node::{Node, NodeKind};
use crate::path::NodePath;
use crate::traits::ContentTree;
use log::{trace, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata for filesystem nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    /// File size in bytes (0 for directories)
    pub size: u64,
    /// Last modified timestamp
    pub modified: Option<SystemTime>,
    /// File extension (if any)
    pub extension: Option<String>,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Dot-files and dot-directories are hidden
    pub hidden: bool,
}

impl std::fmt::Display for FileData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.size)
    }
}

impl Content for FileData {
    fn type_name(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    // Every file is reachable under its own URL, directories are not
    fn route_count(&self) -> usize {
        usize::from(!self.is_dir)
    }

    fn is_published(&self) -> bool {
        !self.hidden
    }
}

/// A content tree over a directory on disk
///
/// Children are ordered directories first, then files, alphabetically within
/// each group.
///
/// # Example
///
/// ```ignore
/// let tree = FilesystemTree::new("/path/to/site")?;
///
/// let root = tree.root()?;
/// for name in &root.children {
///     println!("{}", root.child_path(name)?);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemTree {
    /// Directory the root node maps to
    root_path: PathBuf,
}

impl FilesystemTree {
    /// Create a new filesystem tree rooted at the given directory
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist or isn't a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(TreeError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "Path must be a directory"),
            });
        }

        Ok(Self {
            root_path: path.to_path_buf(),
        })
    }

    /// The directory backing the root node
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Get the full filesystem path for a node path
    pub fn full_path(&self, path: &NodePath) -> PathBuf {
        path.segments()
            .fold(self.root_path.clone(), |acc, segment| acc.join(segment))
    }

    /// Map a path relative to the root directory onto a node path
    ///
    /// Returns `None` for absolute paths, `..` components or names that are
    /// not valid UTF-8.
    pub fn node_path(&self, relative: &Path) -> Option<NodePath> {
        let mut path = NodePath::root();
        for component in relative.components() {
            match component {
                std::path::Component::Normal(name) => {
                    path = path.join(name.to_str()?).ok()?;
                }
                std::path::Component::CurDir => {}
                _ => return None,
            }
        }
        Some(path)
    }

    /// Load child names from the filesystem
    fn load_children(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping non UTF-8 name in {}", dir.display());
                continue;
            };
            // follow symlinks, like `node` does
            let is_dir = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata.is_dir(),
                Err(_) => entry.file_type()?.is_dir(),
            };
            children.push((is_dir, name));
        }

        // Sort children: directories first, then files, alphabetically within each group
        children.sort_by(|(a_dir, a_name), (b_dir, b_name)| {
            b_dir.cmp(a_dir).then_with(|| a_name.cmp(b_name))
        });

        Ok(children.into_iter().map(|(_, name)| name).collect())
    }
}

impl ContentTree for FilesystemTree {
    type Data = FileData;

    fn node(&self, path: &NodePath) -> Result<Node<FileData>> {
        let full_path = self.full_path(path);
        trace!("Reading node {} from {}", path, full_path.display());

        let metadata = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TreeError::NotFound { path: path.clone() })
            }
            Err(source) => {
                return Err(TreeError::Io {
                    path: full_path,
                    source,
                })
            }
        };

        let is_dir = metadata.is_dir();
        let (kind, children) = if is_dir {
            let children = self
                .load_children(&full_path)
                .map_err(|source| TreeError::Io {
                    path: full_path.clone(),
                    source,
                })?;
            (NodeKind::Container, children)
        } else {
            (NodeKind::Leaf, Vec::new())
        };

        let extension = if is_dir {
            None
        } else {
            full_path
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_string())
        };

        let data = FileData {
            size: if is_dir { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
            extension,
            is_dir,
            hidden: path.name().is_some_and(|name| name.starts_with('.')),
        };

        Ok(Node::new(path.clone(), kind, children, data))
    }
}

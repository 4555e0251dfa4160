//! Slash-separated node paths
//!
//! A [`NodePath`] identifies a node by its position in the tree. The root is
//! written `/` (the empty string parses to the root as well), every other path
//! is a sequence of non-empty segments: `/docs/intro`.

use crate::error::{Result, TreeError};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable, validated path to a node in a content tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct NodePath {
    segments: SmallVec<[String; 4]>,
}

impl NodePath {
    /// The root path `/`
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string
    ///
    /// Accepts `""` and `"/"` as the root. Any other input must start with a
    /// slash; a single trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidPath`] for relative paths, empty segments
    /// (`/a//b`) and the special segments `.` and `..`.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() || input == "/" {
            return Ok(Self::root());
        }

        let body = input.strip_prefix('/').ok_or_else(|| TreeError::InvalidPath {
            path: input.to_string(),
            reason: "path must be absolute",
        })?;
        let body = body.strip_suffix('/').unwrap_or(body);

        let mut segments = SmallVec::new();
        for segment in body.split('/') {
            validate_segment(segment).map_err(|reason| TreeError::InvalidPath {
                path: input.to_string(),
                reason,
            })?;
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Returns true for the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments (root = 0)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The last segment, or `None` for the root
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The parent path, or `None` for the root
    pub fn parent(&self) -> Option<NodePath> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self { segments })
    }

    /// Append a child name to this path
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidPath`] if `name` is empty, contains a slash,
    /// or is `.`/`..`.
    pub fn join(&self, name: &str) -> Result<NodePath> {
        validate_segment(name).map_err(|reason| TreeError::InvalidPath {
            path: format!("{}/{}", self.as_prefix(), name),
            reason,
        })?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }

    /// Iterate over the segments from the root down
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.segments.iter().map(String::as_str)
    }

    /// Check whether `self` equals `ancestor` or lies below it
    ///
    /// The comparison is segment-wise: `/a` is a prefix of `/a/b` but not of
    /// `/ab`.
    pub fn starts_with(&self, ancestor: &NodePath) -> bool {
        self.segments.len() >= ancestor.segments.len()
            && self
                .segments
                .iter()
                .zip(ancestor.segments.iter())
                .all(|(a, b)| a == b)
    }

    /// Check whether `self` is a strict ancestor of `other`
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.depth() > self.depth() && other.starts_with(self)
    }

    /// Depth of `self` measured from `anchor`
    ///
    /// Returns `None` when `self` is not inside the anchor subtree.
    pub fn depth_below(&self, anchor: &NodePath) -> Option<usize> {
        self.starts_with(anchor)
            .then(|| self.depth() - anchor.depth())
    }

    // "/" for the root would produce "//name" when joined, so the root renders empty here
    fn as_prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            self.to_string()
        }
    }
}

fn validate_segment(segment: &str) -> std::result::Result<(), &'static str> {
    if segment.is_empty() {
        return Err("empty path segment");
    }
    if segment.contains('/') {
        return Err("segment contains a slash");
    }
    if segment == "." || segment == ".." {
        return Err("relative segments are not allowed");
    }
    Ok(())
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NodePath {
    type Error = TreeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for NodePath {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<NodePath> for String {
    fn from(path: NodePath) -> Self {
        path.to_string()
    }
}

//! Same-level lookahead
//!
//! Finds the nearest candidate among the start node's siblings, without
//! descending or ascending.

use crate::eligibility::{split_siblings, Search};
use crate::error::Result;
use crate::options::Direction;
use content_tree::{ContentTree, Node, NodePath};
use log::debug;

impl<'a, T: ContentTree> Search<'a, T> {
    /// Nearest candidate sibling of `start` in `direction`
    ///
    /// The root has no siblings. A missing start node is an error.
    pub(crate) fn sibling(
        &self,
        start: &NodePath,
        direction: Direction,
    ) -> Result<Option<Node<T::Data>>> {
        if start.is_root() {
            debug!("Sibling search from the root: no {} node", direction);
            return Ok(None);
        }

        let node = self.tree.node(start)?;
        let parent = self.tree.parent(&node)?;
        let (before, after) = split_siblings(&parent, node.name())?;

        match direction {
            Direction::Forward => self.first_candidate(&parent.path, after),
            Direction::Backward => self.first_candidate(&parent.path, before.iter().rev()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::access::RoleCheck;
    use crate::eligibility::{Eligibility, Search};
    use crate::options::Direction;
    use content_tree::{MemoryTree, NodePath, Page};
    use pretty_assertions::assert_eq;

    fn p(s: &str) -> NodePath {
        NodePath::parse(s).unwrap()
    }

    fn filter() -> Eligibility<'static> {
        Eligibility {
            locale_prefix: "phpcr_locale:",
            oracle: None,
            role: RoleCheck::Skip,
            type_filter: None,
        }
    }

    fn found(
        search: &Search<'_, MemoryTree<Page>>,
        start: &str,
        direction: Direction,
    ) -> Option<String> {
        search
            .sibling(&p(start), direction)
            .unwrap()
            .map(|node| node.path.to_string())
    }

    #[test]
    fn test_skips_locale_marker() {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/x", "/a/phpcr_locale:en", "/a/y"]).unwrap();
        let search = Search::new(&tree, filter());

        assert_eq!(found(&search, "/a/x", Direction::Forward), Some("/a/y".into()));
        assert_eq!(found(&search, "/a/y", Direction::Backward), Some("/a/x".into()));
    }

    #[test]
    fn test_ends_of_sibling_list() {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/x", "/a/y"]).unwrap();
        let search = Search::new(&tree, filter());

        assert_eq!(found(&search, "/a/x", Direction::Backward), None);
        assert_eq!(found(&search, "/a/y", Direction::Forward), None);
    }

    #[test]
    fn test_does_not_descend_or_ascend() {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/x/deep", "/a/y", "/b"]).unwrap();
        let search = Search::new(&tree, filter());

        assert_eq!(found(&search, "/a/x", Direction::Forward), Some("/a/y".into()));
        assert_eq!(found(&search, "/a/y", Direction::Forward), None);
        assert_eq!(found(&search, "/a", Direction::Forward), Some("/b".into()));
    }

    #[test]
    fn test_root_has_no_siblings() {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a"]).unwrap();
        let search = Search::new(&tree, filter());

        assert_eq!(found(&search, "/", Direction::Forward), None);
        assert_eq!(found(&search, "/", Direction::Backward), None);
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a"]).unwrap();
        let search = Search::new(&tree, filter());

        let err = search.sibling(&p("/gone"), Direction::Forward).unwrap_err();
        assert!(err.is_not_found());
    }
}

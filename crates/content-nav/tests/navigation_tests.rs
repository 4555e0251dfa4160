use content_nav::prelude::*;
use content_nav::DEFAULT_LOCALE_PREFIX;
use content_tree::{ContentTree, MemoryTree, NodePath, Page, TreeTraversal};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn p(s: &str) -> NodePath {
    NodePath::parse(s).unwrap()
}

fn path_of<D>(found: Option<content_tree::Node<D>>) -> Option<String> {
    found.map(|node| node.path.to_string())
}

fn book() -> MemoryTree<Page> {
    let mut tree = MemoryTree::new();
    tree.insert("/book", Page::new().of_type("book")).unwrap();
    tree.insert("/book/preface", Page::new().with_routes(1))
        .unwrap();
    tree.insert("/book/ch1", Page::new().of_type("chapter"))
        .unwrap();
    tree.insert("/book/ch1/s1", Page::new().with_routes(1))
        .unwrap();
    tree.insert("/book/ch1/phpcr_locale:fr", Page::new())
        .unwrap();
    tree.insert("/book/ch1/phpcr_locale:fr/s1", Page::new().with_routes(1))
        .unwrap();
    tree.insert("/book/ch1/s2", Page::new().with_routes(1))
        .unwrap();
    tree.insert("/book/ch1/s2/notes", Page::new()).unwrap();
    tree.insert("/book/ch2", Page::new().of_type("chapter").as_route())
        .unwrap();
    tree.insert("/book/ch2/s1", Page::new().with_routes(1).unpublished())
        .unwrap();
    tree.insert("/book/appendix", Page::new()).unwrap();
    tree
}

#[test]
fn test_locale_marker_is_skipped() {
    let tree: MemoryTree<Page> =
        MemoryTree::from_paths(["/a/x", "/a/phpcr_locale:en", "/a/y"]).unwrap();
    let navigator = Navigator::new(tree);

    let next = navigator.next(&p("/a/x"), &NavQuery::new()).unwrap();
    assert_eq!(path_of(next), Some("/a/y".to_string()));

    let prev = navigator.prev(&p("/a/y"), &NavQuery::new()).unwrap();
    assert_eq!(path_of(prev), Some("/a/x".to_string()));
}

#[test]
fn test_depth_limit_blocks_descent() {
    let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/b/c", "/a/d"]).unwrap();
    let navigator = Navigator::new(tree);

    let limited = NavQuery::new().anchor(p("/a")).depth(1);
    let next = navigator.next(&p("/a/b"), &limited).unwrap();
    assert_eq!(path_of(next), Some("/a/d".to_string()));

    let unlimited = NavQuery::new().anchor(p("/a"));
    let next = navigator.next(&p("/a/b"), &unlimited).unwrap();
    assert_eq!(path_of(next), Some("/a/b/c".to_string()));
}

#[test]
fn test_prev_of_anchor_is_none() {
    let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/b", "/c"]).unwrap();
    let navigator = Navigator::new(tree);

    let query = NavQuery::new().anchor(p("/a"));
    assert!(navigator.prev(&p("/a"), &query).unwrap().is_none());
}

#[test]
fn test_no_result_is_not_an_error() {
    let navigator = Navigator::new(book());

    let first = navigator.prev(&p("/book/preface"), &NavQuery::new());
    assert!(first.unwrap().is_none());

    let last = navigator.next(&p("/book/appendix"), &NavQuery::new().anchor(p("/book")));
    assert!(last.unwrap().is_none());

    let root = navigator.next(&NodePath::root(), &NavQuery::new());
    assert!(root.unwrap().is_none());
}

#[test]
fn test_hard_errors_propagate() {
    let navigator = Navigator::new(book());

    let missing = navigator
        .next(&p("/book/ch9"), &NavQuery::new())
        .unwrap_err();
    assert!(missing.is_not_found());

    let outside = navigator
        .next_linkable(&p("/book/ch1"), &NavQuery::new().anchor(p("/book/ch2")))
        .unwrap_err();
    assert!(matches!(outside, NavError::NotWithinAnchor { .. }));

    let unconfigured = navigator
        .prev(&p("/book/ch2"), &NavQuery::new().role(RoleCheck::Anonymous))
        .unwrap_err();
    assert!(matches!(
        unconfigured,
        NavError::MissingAccessOracle {
            attribute: AccessAttribute::ViewAnonymous
        }
    ));
}

#[test]
fn test_next_trace_follows_document_order() {
    let navigator = Navigator::new(book());
    let query = NavQuery::new().anchor(p("/book"));

    let mut trace = Vec::new();
    let mut current = p("/book");
    while let Some(node) = navigator.next(&current, &query).unwrap() {
        trace.push(node.path.to_string());
        current = node.path;
    }

    insta::assert_snapshot!(trace.join("\n"), @r"
    /book/preface
    /book/ch1
    /book/ch1/s1
    /book/ch1/s2
    /book/ch1/s2/notes
    /book/ch2
    /book/ch2/s1
    /book/appendix
    ");
}

#[test]
fn test_linkable_lookups_with_access_checks() {
    let navigator = Navigator::new(book()).with_access_oracle(PublishWorkflowOracle::new());
    let anonymous = NavQuery::new()
        .anchor(p("/book"))
        .role(RoleCheck::Anonymous);

    let next = navigator
        .next_linkable(&p("/book/preface"), &anonymous)
        .unwrap();
    assert_eq!(path_of(next), Some("/book/ch1/s1".to_string()));

    // the unpublished section is invisible and the appendix has no route
    let next = navigator.next_linkable(&p("/book/ch2"), &anonymous).unwrap();
    assert!(next.is_none());

    let prev = navigator
        .prev_linkable(&p("/book/ch1/s2"), &anonymous)
        .unwrap();
    assert_eq!(path_of(prev), Some("/book/ch1/s1".to_string()));
}

#[test]
fn test_missing_oracle_is_reported_before_searching() {
    let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a/x", "/a/y", "/a/z"]).unwrap();
    let navigator = Navigator::new(tree);

    let last = navigator
        .next(&p("/a/z"), &NavQuery::new().role(RoleCheck::WithRole))
        .unwrap_err();
    assert!(matches!(last, NavError::MissingAccessOracle { .. }));

    let typed = NavQuery::new().role(RoleCheck::Anonymous).of_type("article");
    let err = navigator.next(&p("/a/x"), &typed).unwrap_err();
    assert!(matches!(err, NavError::MissingAccessOracle { .. }));

    let listing = ListOptions::new().role(RoleCheck::WithRole).of_type("article");
    let err = navigator.children(&p("/a"), &listing).unwrap_err();
    assert!(matches!(err, NavError::MissingAccessOracle { .. }));
}

#[test]
fn test_step_budget_from_options() {
    let tree: MemoryTree<Page> = MemoryTree::from_paths(["/a", "/b", "/c", "/d"]).unwrap();
    let navigator = Navigator::new(tree).with_options(NavigatorOptions::new().max_steps(Some(2)));

    let err = navigator
        .next_linkable(&p("/a"), &NavQuery::new())
        .unwrap_err();
    assert!(matches!(err, NavError::StepBudgetExhausted { steps: 2 }));
}

#[test]
fn test_closure_oracle() {
    let navigator = Navigator::new(book()).with_access_oracle(
        |_attribute: AccessAttribute, path: &NodePath, _content: &dyn content_tree::Content| {
            path.name() != Some("ch1")
        },
    );
    let query = NavQuery::new().role(RoleCheck::WithRole);

    let next = navigator.next(&p("/book/preface"), &query).unwrap();
    assert_eq!(path_of(next), Some("/book/ch2".to_string()));
}

fn flat_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<bool>(), 1..16).prop_map(|markers| {
        markers
            .into_iter()
            .enumerate()
            .map(|(i, structural)| {
                if structural {
                    format!("phpcr_locale:l{i}")
                } else {
                    format!("n{i}")
                }
            })
            .collect()
    })
}

/// Random tree: each entry picks an earlier node (or the root) as parent
fn nested_paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((any::<prop::sample::Index>(), prop::bool::weighted(0.2)), 1..24)
        .prop_map(|entries| {
            let mut paths: Vec<String> = Vec::new();
            for (i, (parent, structural)) in entries.into_iter().enumerate() {
                let name = if structural {
                    format!("phpcr_locale:l{i}")
                } else {
                    format!("n{i}")
                };
                // index 0 stands for the root
                let slot = parent.index(paths.len() + 1);
                let path = if slot == 0 {
                    format!("/{name}")
                } else {
                    format!("{}/{name}", paths[slot - 1])
                };
                paths.push(path);
            }
            paths
        })
}

fn has_structural_segment(path: &NodePath) -> bool {
    path.segments().any(|s| s.starts_with(DEFAULT_LOCALE_PREFIX))
}

proptest! {
    #[test]
    fn prev_then_next_returns_to_start(names in flat_names()) {
        let paths: Vec<String> = names.iter().map(|name| format!("/list/{name}")).collect();
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let navigator = Navigator::new(tree);

        for query in [NavQuery::new(), NavQuery::new().anchor(p("/list"))] {
            for name in names.iter().filter(|n| !n.starts_with(DEFAULT_LOCALE_PREFIX)) {
                let start = p(&format!("/list/{name}"));
                if let Some(prev) = navigator.prev(&start, &query).unwrap() {
                    let back = navigator.next(&prev.path, &query).unwrap().unwrap();
                    prop_assert_eq!(back.path, start.clone());
                }
            }
        }
    }

    #[test]
    fn structural_names_are_never_returned(paths in nested_paths()) {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let navigator = Navigator::new(tree);
        let anchored = NavQuery::new().anchor(NodePath::root());

        for path in paths.iter().map(|s| p(s)).filter(|path| !has_structural_segment(path)) {
            for query in [&NavQuery::new(), &anchored] {
                for found in [
                    navigator.prev(&path, query).unwrap(),
                    navigator.next(&path, query).unwrap(),
                ]
                .into_iter()
                .flatten()
                {
                    prop_assert!(!has_structural_segment(&found.path), "{}", found.path);
                }
            }
        }
    }

    #[test]
    fn anchor_must_be_an_ancestor(a in "[a-c]{1,3}", b in "[a-c]{1,3}") {
        prop_assume!(a != b);
        let tree: MemoryTree<Page> =
            MemoryTree::from_paths([format!("/{a}/x"), format!("/{b}/y")]).unwrap();
        let navigator = Navigator::new(tree);
        let start = p(&format!("/{b}/y"));
        let query = NavQuery::new().anchor(p(&format!("/{a}")));

        let prev_err = navigator.prev(&start, &query).unwrap_err();
        let next_err = navigator.next(&start, &query).unwrap_err();
        prop_assert!(matches!(prev_err, NavError::NotWithinAnchor { .. }), "{:?}", prev_err);
        prop_assert!(matches!(next_err, NavError::NotWithinAnchor { .. }), "{:?}", next_err);
    }

    #[test]
    fn next_chain_matches_walk_order(paths in nested_paths()) {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let expected: Vec<NodePath> = tree
            .walk(&NodePath::root())
            .skip(1)
            .map(|node| node.unwrap().path)
            .filter(|path| !has_structural_segment(path))
            .collect();

        let navigator = Navigator::new(tree);
        let query = NavQuery::new().anchor(NodePath::root());
        let mut visited = Vec::new();
        let mut current = NodePath::root();
        while let Some(node) = navigator.next(&current, &query).unwrap() {
            prop_assert!(visited.len() < expected.len(), "next chain did not end");
            visited.push(node.path.clone());
            current = node.path;
        }
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn linkable_loop_ends_without_linkable_nodes(paths in nested_paths()) {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let navigator = Navigator::new(tree);
        let query = NavQuery::new().anchor(NodePath::root());

        for path in paths.iter().map(|s| p(s)).filter(|path| !has_structural_segment(path)) {
            prop_assert!(navigator.next_linkable(&path, &query).unwrap().is_none());
            prop_assert!(navigator.prev_linkable(&path, &query).unwrap().is_none());
        }
    }

    #[test]
    fn linkable_loop_steps_once_per_node(paths in nested_paths()) {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let eligible = tree
            .walk(&NodePath::root())
            .skip(1)
            .map(|node| node.unwrap().path)
            .filter(|path| !has_structural_segment(path))
            .count();
        let query = NavQuery::new().anchor(NodePath::root());

        // one step per eligible node, plus the step that finds nothing
        let exact = Navigator::new(&tree)
            .with_options(NavigatorOptions::new().max_steps(Some(eligible + 1)));
        prop_assert!(exact.next_linkable(&NodePath::root(), &query).unwrap().is_none());

        let short = Navigator::new(&tree)
            .with_options(NavigatorOptions::new().max_steps(Some(eligible)));
        let err = short.next_linkable(&NodePath::root(), &query).unwrap_err();
        prop_assert!(
            matches!(err, NavError::StepBudgetExhausted { steps } if steps == eligible),
            "{:?}",
            err
        );
    }

    #[test]
    fn shrinking_depth_limit_only_removes_deeper_candidates(paths in nested_paths()) {
        let tree: MemoryTree<Page> = MemoryTree::from_paths(&paths).unwrap();
        let navigator = Navigator::new(tree);

        for path in paths.iter().map(|s| p(s)).filter(|path| !has_structural_segment(path)) {
            let unlimited = navigator.next(&path, &NavQuery::new().anchor(NodePath::root())).unwrap();
            let limited = navigator
                .next(&path, &NavQuery::new().anchor(NodePath::root()).depth(path.depth()))
                .unwrap();
            // only a descent into the start's own children can be blocked
            if let Some(unlimited) = unlimited {
                if !path.is_ancestor_of(&unlimited.path) {
                    prop_assert_eq!(limited.map(|n| n.path), Some(unlimited.path));
                }
            }
        }
    }
}

#[test]
fn test_tree_accessor_is_only_read() {
    let tree = book();
    let before: Vec<_> = tree.walk(&NodePath::root()).map(|n| n.unwrap()).collect();

    let navigator = Navigator::new(&tree);
    navigator
        .next_linkable(&p("/book/preface"), &NavQuery::new().anchor(p("/book")))
        .unwrap();

    let after: Vec<_> = navigator
        .tree()
        .walk(&NodePath::root())
        .map(|n| n.unwrap())
        .collect();
    assert_eq!(before, after);
    assert!(navigator.tree().exists(&p("/book/ch2/s1")).unwrap());
}

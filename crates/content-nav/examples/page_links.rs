//! Prints previous/next page links for every file below a directory
//!
//! Usage:
//!   cargo run --example page_links [path]
//!
//! If no path is provided, uses the current directory.

use std::env;

use content_nav::prelude::*;
use content_tree::{FilesystemTree, NodePath, TreeTraversal};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let tree = match FilesystemTree::new(&path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error opening directory: {}", e);
            std::process::exit(1);
        }
    };

    let pages: Vec<NodePath> = tree
        .walk(&NodePath::root())
        .filter_map(Result::ok)
        .filter(|node| node.kind.is_leaf())
        .map(|node| node.path)
        .collect();

    let navigator = Navigator::new(tree).with_access_oracle(PublishWorkflowOracle::new());
    let query = NavQuery::new()
        .anchor(NodePath::root())
        .role(RoleCheck::Anonymous);

    for page in &pages {
        let prev = navigator.prev_linkable(page, &query);
        let next = navigator.next_linkable(page, &query);

        match (prev, next) {
            (Ok(prev), Ok(next)) => {
                let show = |node: Option<content_tree::Node<_>>| {
                    node.map_or_else(|| "-".to_string(), |node| node.path.to_string())
                };
                println!("{}  <- {} | {} ->", page, show(prev), show(next));
            }
            (Err(e), _) | (_, Err(e)) => eprintln!("{}: {}", page, e),
        }
    }
}

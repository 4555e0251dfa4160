//! content-nav - previous/next navigation over a directory tree

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use path_clean::PathClean;

use content_nav::{
    ListOptions, NavQuery, Navigator, NavigatorOptions, PublishWorkflowOracle, RoleCheck,
};
use content_tree::{ContentTree, FileData, FilesystemTree, Node, NodePath, TreeTraversal};

#[derive(Parser)]
#[command(name = "content-nav")]
#[command(version, about = "Previous/next navigation over a content directory", long_about = None)]
#[command(after_help = "EXAMPLES:
    content-nav site next /docs/intro.md                Next sibling
    content-nav site next /docs/intro.md --anchor /docs  Next page below /docs
    content-nav site children site/docs --limit 5        First five children")]
struct Cli {
    /// Directory the content tree is read from
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// JSON file with navigator options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Previous eligible node
    Prev(LookupArgs),
    /// Next eligible node
    Next(LookupArgs),
    /// Previous node that has a route
    PrevLinkable(LookupArgs),
    /// Next node that has a route
    NextLinkable(LookupArgs),
    /// List the children of a node
    Children {
        /// Node path or filesystem path under ROOT
        path: String,

        /// Maximum number of children
        #[arg(long)]
        limit: Option<usize>,

        /// Name of the first child to list
        #[arg(long)]
        offset: Option<String>,

        /// Child name pattern, `|`-separated globs
        #[arg(long)]
        filter: Option<String>,
    },
    /// List all paths below a node
    Descendants {
        /// Node path or filesystem path under ROOT
        path: String,

        /// Maximum depth below the node
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Print the whole subtree in document order
    Walk {
        /// Node path or filesystem path under ROOT
        path: Option<String>,
    },
}

#[derive(Args)]
struct LookupArgs {
    /// Node path or filesystem path under ROOT
    path: String,

    /// Search the flattened subtree of this node instead of the siblings
    #[arg(long)]
    anchor: Option<String>,

    /// Maximum depth below the anchor
    #[arg(long, requires = "anchor")]
    depth: Option<usize>,

    /// Only return nodes the current user may view
    #[arg(long, conflicts_with = "anonymous")]
    role: bool,

    /// Only return nodes an anonymous visitor may view
    #[arg(long)]
    anonymous: bool,

    /// Only return nodes of this type (file extension)
    #[arg(long = "type", value_name = "TYPE")]
    type_filter: Option<String>,
}

impl LookupArgs {
    fn role_check(&self) -> RoleCheck {
        if self.anonymous {
            RoleCheck::Anonymous
        } else if self.role {
            RoleCheck::WithRole
        } else {
            RoleCheck::Skip
        }
    }

    fn query(&self, tree: &FilesystemTree) -> Result<NavQuery> {
        let mut query = NavQuery::new().role(self.role_check());
        if let Some(anchor) = &self.anchor {
            query = query.anchor(resolve(tree, anchor)?);
        }
        query.depth = self.depth;
        query.type_filter = self.type_filter.clone();
        Ok(query)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = match &cli.config {
        Some(path) => load_options(path)?,
        None => NavigatorOptions::default(),
    };
    let tree = FilesystemTree::new(&cli.root)
        .with_context(|| format!("Failed to open content root {}", cli.root.display()))?;

    match &cli.command {
        Command::Prev(args)
        | Command::Next(args)
        | Command::PrevLinkable(args)
        | Command::NextLinkable(args) => {
            let start = resolve(&tree, &args.path)?;
            let query = args.query(&tree)?;

            let mut navigator = Navigator::new(tree).with_options(options);
            if query.role != RoleCheck::Skip {
                navigator = navigator.with_access_oracle(PublishWorkflowOracle::new());
            }

            let found = match &cli.command {
                Command::Prev(_) => navigator.prev(&start, &query)?,
                Command::Next(_) => navigator.next(&start, &query)?,
                Command::PrevLinkable(_) => navigator.prev_linkable(&start, &query)?,
                _ => navigator.next_linkable(&start, &query)?,
            };
            print_result(found);
        }
        Command::Children {
            path,
            limit,
            offset,
            filter,
        } => {
            let parent = resolve(&tree, path)?;
            let list = ListOptions {
                limit: *limit,
                offset: offset.clone(),
                filter: filter.clone(),
                ..ListOptions::default()
            };

            let navigator = Navigator::new(tree).with_options(options);
            for child in navigator.children(&parent, &list)? {
                println!("{}", child.path);
            }
        }
        Command::Descendants { path, depth } => {
            let parent = resolve(&tree, path)?;
            let navigator = Navigator::new(tree).with_options(options);
            for path in navigator.descendants(&parent, *depth)? {
                println!("{path}");
            }
        }
        Command::Walk { path } => {
            let start = match path {
                Some(path) => resolve(&tree, path)?,
                None => NodePath::root(),
            };
            for node in tree.walk(&start) {
                println!("{}", node?.path);
            }
        }
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<NavigatorOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Map a command-line argument onto a node path
///
/// An existing node path wins. Anything else is taken as a filesystem path
/// and must lie under the content root.
fn resolve(tree: &FilesystemTree, arg: &str) -> Result<NodePath> {
    if let Ok(path) = NodePath::parse(arg) {
        if tree.exists(&path)? {
            return Ok(path);
        }
    }

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let target = cwd.join(arg).clean();
    let root = cwd.join(tree.root_path()).clean();
    debug!("Resolving {} against {}", target.display(), root.display());

    pathdiff::diff_paths(&target, &root)
        .and_then(|relative| tree.node_path(&relative))
        .with_context(|| format!("'{arg}' is neither a node nor a path under {}", root.display()))
}

fn print_result(found: Option<Node<FileData>>) {
    match found {
        Some(node) => println!("{}", node.path),
        None => println!("(none)"),
    }
}

//! `routegen tree`: show how declaration keys were folded.

use std::fmt::Write as _;

use clap::Args;
use routegen_core::tree::{Entry, RouteNode, Segment};
use routegen_core::{RouteTree, build_tree};

use crate::common::{SourceArgs, load_config, load_routes};
use crate::run_command;

/// Arguments of `routegen tree`.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Manifest and layout.
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Run the command, returning the exit code.
pub fn run(args: TreeArgs) -> i32 {
    run_command(|| run_inner(args))
}

fn run_inner(args: TreeArgs) -> Result<(), String> {
    let routes = load_routes(&args.source.routes)?;
    let config = load_config(&args.source)?;
    let tree = build_tree(&routes, &config)
        .map_err(|err| format!("Failed to build route tree: {err}"))?;

    print!("{}", render_tree(&tree));
    println!("{} endpoint(s)", tree.endpoint_count());
    Ok(())
}

/// Indented listing of the tree: one line per segment and per attached route.
pub fn render_tree(tree: &RouteTree) -> String {
    let mut out = String::from("/\n");
    render_node(tree.root(), 1, &mut out);
    out
}

fn render_node(node: &RouteNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for entry in node.entries() {
        match entry {
            Entry::Leaf(route) => {
                let _ = writeln!(
                    out,
                    "{indent}{} {} -> {}",
                    route.method, route.path, route.return_type
                );
            }
            Entry::Branch { segment, node } => {
                let kind = match segment {
                    Segment::Static(_) => String::new(),
                    Segment::Required(param) => format!("  (param {})", param.ident()),
                    Segment::Optional(param) => format!("  (optional param {})", param.ident()),
                };
                let _ = writeln!(out, "{indent}{segment}/{kind}");
                render_node(node, depth + 1, out);
            }
        }
    }
}

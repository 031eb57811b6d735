//! Hierarchical route tree.
//!
//! Each [`RouteNode`] holds branches to child nodes, labelled with their
//! classified [`Segment`], and leaves holding the [`RouteDescriptor`] attached
//! for one HTTP method. Both kinds share a single insertion order, exposed as
//! [`Entry`] values, which is the order members appear in the generated
//! client.
//!
//! Trees are produced by [`TreeBuilder`] and are read-only afterwards.

mod builder;
mod segment;

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;

use crate::route::{HttpMethod, RouteDescriptor};

pub use builder::{
    DEFAULT_ROUTES_ROOT, DEFAULT_TERMINAL_MARKER, DuplicatePolicy, LayoutOptions, TreeBuilder,
    normalize_declaration_key,
};
pub use segment::{Param, Segment};

/// Position of one entry in a node's insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryKey {
    Segment(String),
    Method(HttpMethod),
}

/// Child node together with the segment leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Branch {
    segment: Segment,
    node: RouteNode,
}

/// Entry of a node, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// Child node reached through `segment`.
    Branch {
        /// Classified segment labelling the edge.
        segment: &'a Segment,
        /// The child.
        node: &'a RouteNode,
    },
    /// Route attached at this node.
    Leaf(&'a RouteDescriptor),
}

/// One level of the route tree.
///
/// Children are keyed by raw segment text and routes by method, in separate
/// maps, so a segment named `GET` and an attached GET never share a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteNode {
    branches: IndexMap<String, Branch>,
    methods: IndexMap<HttpMethod, RouteDescriptor>,
    order: Vec<EntryKey>,
}

impl RouteNode {
    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.order.iter().filter_map(|key| match key {
            EntryKey::Segment(raw) => self.branches.get(raw).map(|branch| Entry::Branch {
                segment: &branch.segment,
                node: &branch.node,
            }),
            EntryKey::Method(method) => self.methods.get(method).map(Entry::Leaf),
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the node has neither children nor methods.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Child reached through the raw segment text.
    pub fn child(&self, raw: &str) -> Option<&RouteNode> {
        self.branches.get(raw).map(|branch| &branch.node)
    }

    /// Route attached for `method`.
    pub fn method(&self, method: HttpMethod) -> Option<&RouteDescriptor> {
        self.methods.get(&method)
    }

    /// Attached routes in insertion order.
    pub fn methods(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.methods.values()
    }

    /// Children with their segments in insertion order.
    pub fn branches(&self) -> impl Iterator<Item = (&Segment, &RouteNode)> {
        self.branches
            .values()
            .map(|branch| (&branch.segment, &branch.node))
    }

    /// Child for the raw segment text, created when missing.
    fn branch_or_insert(&mut self, raw: &str) -> &mut RouteNode {
        let branch = match self.branches.entry(raw.to_string()) {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => {
                self.order.push(EntryKey::Segment(raw.to_string()));
                entry.insert(Branch {
                    segment: Segment::parse(raw),
                    node: RouteNode::default(),
                })
            }
        };
        &mut branch.node
    }

    /// Attach a route, returning the one it replaced. A replacement keeps
    /// the position of the route it replaced.
    fn attach(&mut self, route: RouteDescriptor) -> Option<RouteDescriptor> {
        let method = route.method;
        let previous = self.methods.insert(method, route);
        if previous.is_none() {
            self.order.push(EntryKey::Method(method));
        }
        previous
    }
}

/// A route attached somewhere in the tree, with the segments leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Segments from the root to the attachment node.
    pub segments: Vec<&'a Segment>,
    /// The attached route.
    pub route: &'a RouteDescriptor,
}

/// Route tree built from a [`RouteCollection`](crate::route::RouteCollection).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    root: RouteNode,
}

impl RouteTree {
    /// The client's entry point.
    pub fn root(&self) -> &RouteNode {
        &self.root
    }

    /// Every attached route, depth first in emission order.
    pub fn endpoints(&self) -> Vec<Endpoint<'_>> {
        let mut endpoints = Vec::new();
        collect_endpoints(&self.root, &mut Vec::new(), &mut endpoints);
        endpoints
    }

    /// Number of attached routes.
    pub fn endpoint_count(&self) -> usize {
        count_endpoints(&self.root)
    }
}

fn collect_endpoints<'a>(
    node: &'a RouteNode,
    path: &mut Vec<&'a Segment>,
    out: &mut Vec<Endpoint<'a>>,
) {
    for entry in node.entries() {
        match entry {
            Entry::Leaf(route) => out.push(Endpoint {
                segments: path.clone(),
                route,
            }),
            Entry::Branch { segment, node } => {
                path.push(segment);
                collect_endpoints(node, path, out);
                path.pop();
            }
        }
    }
}

fn count_endpoints(node: &RouteNode) -> usize {
    node.entries()
        .map(|entry| match entry {
            Entry::Leaf(_) => 1,
            Entry::Branch { node, .. } => count_endpoints(node),
        })
        .sum()
}

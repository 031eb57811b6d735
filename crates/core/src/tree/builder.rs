//! Folding a flat route collection into a [`RouteTree`].

use serde::Deserialize;
use tracing::{debug, warn};

use super::{RouteNode, RouteTree};
use crate::error::BuildError;
use crate::route::{RouteCollection, RouteSet};

/// Default marker stripped from the front of declaration keys.
pub const DEFAULT_ROUTES_ROOT: &str = "src/routes/";

/// Default final segment that marks where routes attach.
pub const DEFAULT_TERMINAL_MARKER: &str = "+server.ts";

/// What to do when one node receives the same HTTP method twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the build with [`BuildError::DuplicateMethod`].
    #[default]
    Error,
    /// Keep the route processed last.
    Overwrite,
}

/// How declaration keys map onto the tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct LayoutOptions {
    /// Everything up to and including the last occurrence of this marker is
    /// stripped from declaration keys.
    pub routes_root: String,
    /// Final segment denoting the attachment point.
    pub terminal_marker: String,
    /// Policy for methods declared twice at one attachment point.
    pub duplicate_methods: DuplicatePolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            routes_root: DEFAULT_ROUTES_ROOT.to_string(),
            terminal_marker: DEFAULT_TERMINAL_MARKER.to_string(),
            duplicate_methods: DuplicatePolicy::default(),
        }
    }
}

/// Make a declaration key relative to the routes root.
///
/// Keys that do not start with `/` get Windows separators converted first.
pub fn normalize_declaration_key(key: &str, routes_root: &str) -> String {
    let key = if key.starts_with('/') {
        key.to_string()
    } else {
        key.replace('\\', "/")
    };

    let root = routes_root.replace('\\', "/");
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return key;
    }

    let marker = format!("{root}/");
    match key.rfind(&marker) {
        Some(idx) => key[idx + marker.len()..].to_string(),
        None => key,
    }
}

/// Builds route trees according to [`LayoutOptions`].
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    options: &'a LayoutOptions,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder.
    pub fn new(options: &'a LayoutOptions) -> Self {
        Self { options }
    }

    /// Build the tree. Runs to completion before the tree is handed out.
    pub fn build(&self, routes: &RouteCollection) -> Result<RouteTree, BuildError> {
        let mut root = RouteNode::default();

        for (declaration_key, route_set) in routes.iter() {
            let key = normalize_declaration_key(declaration_key, &self.options.routes_root);
            self.insert(&mut root, &key, route_set)?;
        }

        let tree = RouteTree { root };
        debug!(
            declarations = routes.len(),
            endpoints = tree.endpoint_count(),
            "Built route tree."
        );
        Ok(tree)
    }

    fn insert(&self, root: &mut RouteNode, key: &str, routes: &RouteSet) -> Result<(), BuildError> {
        let mut current = root;
        let mut segments = key.split('/').filter(|segment| !segment.is_empty());

        while let Some(segment) = segments.next() {
            if segment == self.options.terminal_marker {
                let trailing: Vec<&str> = segments.by_ref().collect();
                if !trailing.is_empty() {
                    warn!(
                        key,
                        trailing = %trailing.join("/"),
                        "Ignoring segments after the terminal marker."
                    );
                }
                return self.attach(current, key, routes);
            }
            current = current.branch_or_insert(segment);
        }

        debug!(key, "Declaration key has no terminal marker; nothing attached.");
        Ok(())
    }

    fn attach(&self, node: &mut RouteNode, key: &str, routes: &RouteSet) -> Result<(), BuildError> {
        for route in routes.values() {
            if node.method(route.method).is_some() {
                match self.options.duplicate_methods {
                    DuplicatePolicy::Error => {
                        return Err(BuildError::DuplicateMethod {
                            key: key.to_string(),
                            method: route.method,
                        });
                    }
                    DuplicatePolicy::Overwrite => {
                        warn!(key, method = %route.method, "Overwriting duplicate route.");
                    }
                }
            }
            node.attach(route.clone());
        }
        Ok(())
    }
}

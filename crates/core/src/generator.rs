//! Client generation entry point.
//!
//! The pipeline is:
//! 1. Build: RouteCollection -> RouteTree (runs to completion first)
//! 2. Codegen: RouteTree -> TsModule (TypeScript AST)
//! 3. Print: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::client::codegen_module;
use crate::config::Config;
use crate::error::{BuildError, GenerateError};
use crate::route::RouteCollection;
use crate::tree::{RouteTree, TreeBuilder};
use crate::ts::to_source;

/// Build the route tree using the layout section of `config`.
pub fn build_tree(routes: &RouteCollection, config: &Config) -> Result<RouteTree, BuildError> {
    TreeBuilder::new(&config.layout).build(routes)
}

/// Generate the client source for a route collection.
pub fn generate(routes: &RouteCollection, config: &Config) -> Result<String, GenerateError> {
    let tree = build_tree(routes, config)?;
    let module = codegen_module(&tree, &config.codegen)?;
    let source = to_source(&module, &config.format);
    debug!(
        routes = routes.route_count(),
        bytes = source.len(),
        "Generated client source."
    );
    Ok(source)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::route::{HttpMethod, RouteDescriptor};

    #[test]
    fn test_generate_empty_collection() {
        let source = generate(&RouteCollection::new(), &Config::default()).unwrap();
        assert!(source.starts_with("/**\n * This file is generated by routegen."));
        assert!(source.ends_with("\n\nexport default {};\n"));
    }

    #[test]
    fn test_generate_propagates_build_errors() {
        let routes: RouteCollection = [
            ("a/+server.ts", RouteDescriptor::new(HttpMethod::Get, "/a", "A")),
            ("/x/src/routes/a/+server.ts", RouteDescriptor::new(HttpMethod::Get, "/a", "A")),
        ]
        .into_iter()
        .collect();
        let err = generate(&routes, &Config::default()).unwrap_err();
        assert!(matches!(err, GenerateError::Build(BuildError::DuplicateMethod { .. })));
        assert_eq!(err.to_string(), "duplicate GET route declared at 'a/+server.ts'");
    }

    #[test]
    fn test_generate_reports_member_collisions() {
        let routes: RouteCollection = [
            ("a/[id]/+server.ts", RouteDescriptor::new(HttpMethod::Get, "/a/[id]", "A")),
            ("a/[[id]]/+server.ts", RouteDescriptor::new(HttpMethod::Get, "/a/[[id]]", "A")),
        ]
        .into_iter()
        .collect();
        let err = generate(&routes, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "generated client would declare 'id' twice under '/a'");
    }
}

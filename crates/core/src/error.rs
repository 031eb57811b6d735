//! Error types for loading, building and generating.

use std::path::PathBuf;

use thiserror::Error;

use crate::route::HttpMethod;

/// Failure to turn a route manifest into a [`RouteCollection`](crate::route::RouteCollection).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The manifest is not valid JSON or does not have the manifest shape.
    #[error("invalid route manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// An HTTP verb outside of GET, POST, PUT and DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method '{0}' (expected GET, POST, PUT or DELETE)")]
pub struct UnsupportedMethod(pub String);

/// Failure while folding declaration keys into the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two route descriptors attach the same verb to one node.
    #[error("duplicate {method} route declared at '{key}'")]
    DuplicateMethod {
        /// Normalized declaration key of the second declaration.
        key: String,
        /// The verb declared twice.
        method: HttpMethod,
    },
}

/// Failure of the full generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The route tree could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// Two entries of one node map to the same member of the generated object.
    #[error("generated client would declare '{name}' twice under '{key}'")]
    MemberCollision {
        /// Path of the node, `/` for the root.
        key: String,
        /// The member name both entries produce.
        name: String,
    },
}

/// Failure to load a `routegen.toml` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown values.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Typed TypeScript API clients from file-system route definitions.
//!
//! A [`RouteCollection`] maps declaration keys such as
//! `src/routes/users/[id]/+server.ts` to the routes declared there. The
//! generator folds the keys into a [`RouteTree`] and emits a client object
//! that mirrors the hierarchy:
//!
//! ```text
//! users/[id]/+server.ts  GET /users/[id] -> User
//!
//! client.users.id('42').get()   // fetch(`/users/${id}`)
//! ```
//!
//! Modules:
//! - `route`: input data model and manifest parsing
//! - `tree`: Tree Builder and the immutable route tree
//! - `client`: Client Emitter (tree to TypeScript AST)
//! - `ts`: TypeScript AST and printer
//! - `config`: `routegen.toml`
//! - `generator`: the end-to-end `generate` pipeline

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod route;
pub mod tree;
pub mod ts;

pub use config::{CONFIG_FILENAME, Config};
pub use error::{BuildError, ConfigError, GenerateError, LoadError, UnsupportedMethod};
pub use generator::{build_tree, generate};
pub use route::{HttpMethod, RouteCollection, RouteDescriptor, RouteSet};
pub use tree::RouteTree;

//! Client emitter: turns a [`RouteTree`](crate::tree::RouteTree) into the
//! TypeScript AST of the generated client.
//!
//! - `codegen`: recursive descent over the tree
//! - `context`: parameters in scope during the descent
//! - `url`: placeholder substitution into URL template literals

mod codegen;
mod context;
mod url;

pub use codegen::{
    CodegenOptions, DEFAULT_BANNER, MethodNaming, codegen_members, codegen_module,
};
pub use context::EmitContext;
pub use url::{UrlPart, substitute, url_expr};

//! TypeScript AST and printer.
//!
//! - `types`: AST nodes (types, expressions, statements, object members)
//! - `emit`: AST to source text via the `Emit` trait
//! - `printer`: output buffer and formatting options
//! - `utils`: identifier sanitizing and escaping shared by codegen and emit

mod emit;
mod printer;
mod types;
pub mod utils;

pub use emit::{Emit, to_source};
pub use printer::{DEFAULT_INDENT_WIDTH, Dialect, FormatOptions, Printer, QuoteStyle};
pub use types::{
    DocComment, TemplatePart, TsExpr, TsLiteral, TsMember, TsMethod, TsModule, TsObject, TsParam,
    TsStmt, TsType,
};

//! Subcommands, one module each.

pub mod generate;
pub mod tree;

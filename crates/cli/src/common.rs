//! Arguments and loaders shared across CLI commands

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use routegen_core::client::MethodNaming;
use routegen_core::tree::DuplicatePolicy;
use routegen_core::ts::{Dialect, QuoteStyle};
use routegen_core::{Config, RouteCollection};
use tracing::debug;

/// Where routes come from and how their keys are laid out.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Route manifest (JSON object of declaration key -> routes)
    #[arg(long, value_name = "MANIFEST")]
    pub routes: PathBuf,
    /// Configuration file [default: ./routegen.toml when present]
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
    /// Prefix stripped from declaration keys (overrides config)
    #[arg(long = "routes-root", value_name = "DIR")]
    pub routes_root: Option<String>,
    /// Segment marking where routes attach (overrides config)
    #[arg(long = "terminal-marker", value_name = "NAME")]
    pub terminal_marker: Option<String>,
    /// Keep the last route when a method is declared twice instead of failing
    #[arg(long = "allow-duplicates")]
    pub allow_duplicates: bool,
}

/// String literal quotes
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum QuoteArg {
    /// 'single'
    Single,
    /// "double"
    Double,
}

impl From<QuoteArg> for QuoteStyle {
    fn from(value: QuoteArg) -> Self {
        match value {
            QuoteArg::Single => QuoteStyle::Single,
            QuoteArg::Double => QuoteStyle::Double,
        }
    }
}

/// Output language
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum DialectArg {
    /// TypeScript with type annotations
    Ts,
    /// Plain JavaScript
    Js,
}

impl From<DialectArg> for Dialect {
    fn from(value: DialectArg) -> Self {
        match value {
            DialectArg::Ts => Dialect::TypeScript,
            DialectArg::Js => Dialect::JavaScript,
        }
    }
}

/// Spelling of the generated verb methods
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum MethodNamingArg {
    /// get, post, put, delete
    Lower,
    /// GET, POST, PUT, DELETE
    Upper,
}

impl From<MethodNamingArg> for MethodNaming {
    fn from(value: MethodNamingArg) -> Self {
        match value {
            MethodNamingArg::Lower => MethodNaming::Lower,
            MethodNamingArg::Upper => MethodNaming::Upper,
        }
    }
}

/// Read and parse a route manifest.
pub fn load_routes(path: &Path) -> Result<RouteCollection, String> {
    let json = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read manifest {}: {err}", path.display()))?;
    let routes = RouteCollection::from_json(&json)
        .map_err(|err| format!("Failed to load manifest {}: {err}", path.display()))?;
    debug!(
        path = %path.display(),
        declarations = routes.len(),
        routes = routes.route_count(),
        "Loaded route manifest."
    );
    Ok(routes)
}

/// Load the configuration and apply the layout flags on top of it.
///
/// An explicit `--config` must exist; otherwise `routegen.toml` in the
/// current directory is used when present.
pub fn load_config(args: &SourceArgs) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_path(path).map_err(|err| err.to_string())?,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|err| format!("Failed to get current directory: {err}"))?;
            Config::load_or_default(&cwd).map_err(|err| err.to_string())?
        }
    };

    if let Some(root) = &args.routes_root {
        config.layout.routes_root.clone_from(root);
    }
    if let Some(marker) = &args.terminal_marker {
        config.layout.terminal_marker.clone_from(marker);
    }
    if args.allow_duplicates {
        config.layout.duplicate_methods = DuplicatePolicy::Overwrite;
    }
    Ok(config)
}

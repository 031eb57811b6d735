//! `routegen.toml` configuration.
//!
//! ```toml
//! [layout]
//! routes-root = "src/routes/"
//! terminal-marker = "+server.ts"
//! duplicate-methods = "error"
//!
//! [format]
//! indent-width = 4
//! quote-style = "single"
//! dialect = "typescript"
//!
//! [codegen]
//! method-naming = "lower"
//! banner = "Generated client."
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::client::CodegenOptions;
use crate::error::ConfigError;
use crate::tree::LayoutOptions;
use crate::ts::FormatOptions;

/// File name looked up by [`Config::load_or_default`].
pub const CONFIG_FILENAME: &str = "routegen.toml";

/// Full generator configuration. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `[layout]`: how declaration keys map onto the tree.
    pub layout: LayoutOptions,
    /// `[format]`: printer settings.
    pub format: FormatOptions,
    /// `[codegen]`: shape of the generated client.
    pub codegen: CodegenOptions,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), "Loaded configuration.");
        Ok(config)
    }

    /// Load `routegen.toml` from `dir`, or defaults when there is none.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path: PathBuf = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            debug!(dir = %dir.display(), "No {CONFIG_FILENAME} found, using defaults.");
            Ok(Self::default())
        }
    }
}

//! Configuration for citygraph
//!
//! An optional TOML file tunes how traversals behave:
//!
//! ```toml
//! [traversal]
//! neighbor_order = "lexical"     # or "declared" (default)
//! unreached_target = "empty"     # or "fail" (default)
//! strict_nodes = false           # default true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::TraversalOptions;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "CITYGRAPH_CONFIG";

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub traversal: TraversalOptions,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GraphError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), traversal = ?config.traversal, "config_loaded");
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

//! Output format handling for citygraph
//!
//! - human: path as space-separated node identifiers on one line
//! - json: a single object describing the traversal

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::TraversalOutcome;

/// Output format for traversal results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::BadArguments(format!(
                "unknown format: {} (expected: human or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a traversal outcome as one line (without trailing newline)
pub fn render(outcome: &TraversalOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(outcome.path.join(" ")),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
    }
}

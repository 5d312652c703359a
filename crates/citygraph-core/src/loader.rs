//! Distance table loading
//!
//! Input documents are JSON objects with a single `Distances` field:
//!
//! ```json
//! {"Distances": {"A": {"B": 5}, "B": {"C": 2}, "C": {}}}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// On-disk shape of a distance table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceData {
    #[serde(rename = "Distances", alias = "distances")]
    pub distances: Graph,
}

/// Read and parse a distance table file
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GraphError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    load_from_str(&text)
}

/// Parse a distance table from JSON text.
///
/// The root must be a JSON object; serde's sequence form of a struct is
/// not accepted.
pub fn load_from_str(text: &str) -> Result<Graph> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    if !root.is_object() {
        return Err(GraphError::deserialization(format!(
            "expected an object with a \"Distances\" field, found {}",
            json_kind(&root)
        )));
    }
    let graph = DistanceData::deserialize(root)?.distances;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );

    let dangling = graph.dangling_neighbors();
    if !dangling.is_empty() {
        warn!(
            count = dangling.len(),
            nodes = ?dangling,
            "neighbors without an adjacency entry"
        );
    }

    Ok(graph)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Serialize a graph back into the distance table document shape
pub fn to_json_string(graph: &Graph) -> Result<String> {
    #[derive(Serialize)]
    struct DistanceDataRef<'a> {
        #[serde(rename = "Distances")]
        distances: &'a Graph,
    }

    Ok(serde_json::to_string_pretty(&DistanceDataRef {
        distances: graph,
    })?)
}

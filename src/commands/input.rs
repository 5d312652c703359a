//! Start/target node input
//!
//! Nodes come from `--start`/`--target` when given, otherwise one per line
//! from standard input: the start first, then the target for algorithms
//! that search for one.

use std::io::BufRead;

use citygraph_core::error::{GraphError, Result};
use citygraph_core::graph::{Algorithm, TraversalRequest};

/// Read one line, stripping the line terminator
fn read_node<R: BufRead>(reader: &mut R, what: &str) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(GraphError::MissingInput {
            what: what.to_string(),
        });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Build the traversal request, reading missing endpoints from `reader`
pub fn read_request<R: BufRead>(
    reader: &mut R,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
) -> Result<TraversalRequest> {
    let start = match start {
        Some(start) => start.to_string(),
        None => read_node(reader, "start node")?,
    };

    let target = if algorithm.needs_target() {
        Some(match target {
            Some(target) => target.to_string(),
            None => read_node(reader, "target node")?,
        })
    } else {
        None
    };

    tracing::debug!(%algorithm, %start, target = ?target, "request_read");

    Ok(TraversalRequest {
        algorithm,
        start,
        target,
    })
}

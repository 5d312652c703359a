//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for fewest-hop paths
//! - `dfs`: Depth-first reachability traversal
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_find_path;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_find_path;

use crate::error::{GraphError, Result};
use crate::graph::path::path_cost;
use crate::graph::types::{Algorithm, TraversalOptions, TraversalOutcome, TraversalRequest};
use crate::graph::GraphProvider;

/// Run a single traversal request against `provider`
pub fn run(
    provider: &dyn GraphProvider,
    request: &TraversalRequest,
    opts: &TraversalOptions,
) -> Result<TraversalOutcome> {
    let target = match (request.algorithm.needs_target(), request.target.as_deref()) {
        (true, Some(target)) => Some(target),
        (true, None) => {
            return Err(GraphError::MissingInput {
                what: format!("target for {}", request.algorithm),
            })
        }
        (false, _) => None,
    };

    let path = match (request.algorithm, target) {
        (Algorithm::Bfs, Some(target)) => bfs_find_path(provider, &request.start, target, opts)?,
        (Algorithm::Dijkstra, Some(target)) => {
            dijkstra_find_path(provider, &request.start, target, opts)?
        }
        _ => dfs_traverse(provider, &request.start, opts)?,
    };

    let cost = if request.algorithm.needs_target() && !path.is_empty() {
        Some(path_cost(provider, &path)?)
    } else {
        None
    };

    Ok(TraversalOutcome {
        algorithm: request.algorithm,
        start: request.start.clone(),
        target: target.map(str::to_string),
        path,
        cost,
    })
}

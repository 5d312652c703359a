//! Path reconstruction utilities for graph traversal

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, Path};
use std::collections::HashMap;

/// Rebuild the `start -> target` path by walking parent links back from
/// `target`.
///
/// Fails with `MissingParentLink` when a node other than `start` has no
/// recorded parent, which happens when `target` was never reached. A parent
/// chain that loops without reaching `start` fails with `ParentCycle`.
pub fn reconstruct_path(
    start: &str,
    target: &str,
    parents: &HashMap<String, String>,
) -> Result<Path> {
    let mut path = Vec::new();
    let mut current = target;

    while current != start {
        path.push(current.to_string());
        current = parents
            .get(current)
            .map(String::as_str)
            .ok_or_else(|| GraphError::missing_parent(current))?;
        if path.len() > parents.len() {
            return Err(GraphError::parent_cycle(current));
        }
    }

    path.push(start.to_string());
    path.reverse();
    Ok(path)
}

/// Sum of edge weights along `path`.
///
/// Empty and single-node paths cost 0. A hop that is not an edge of the
/// graph fails with `UnknownNode` naming the hop's destination.
pub fn path_cost(provider: &dyn GraphProvider, path: &[String]) -> Result<Distance> {
    path.windows(2).try_fold(0, |total: Distance, hop| {
        let weight = provider
            .neighbors(&hop[0])
            .ok_or_else(|| GraphError::unknown_node(hop[0].as_str()))?
            .iter()
            .find(|edge| edge.to == hop[1])
            .map(|edge| edge.weight)
            .ok_or_else(|| GraphError::unknown_node(hop[1].as_str()))?;
        Ok(total + Distance::from(weight))
    })
}

use crate::error::Result;
use crate::graph::algos::shared::expand;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Path, TraversalOptions};
use crate::graph::GraphProvider;
use std::collections::{HashMap, HashSet, VecDeque};

/// Find the fewest-hop path from `start` to `target`.
///
/// Edge weights are ignored. Returns `[start]` when `start == target`
/// and an empty path when `target` is unreachable. Expanding a node with
/// no adjacency entry fails with `UnknownNode` under `strict_nodes`.
#[tracing::instrument(skip(provider, opts), fields(start = %start, target = %target, order = ?opts.neighbor_order))]
pub fn bfs_find_path(
    provider: &dyn GraphProvider,
    start: &str,
    target: &str,
    opts: &TraversalOptions,
) -> Result<Path> {
    if start == target {
        return Ok(vec![start.to_string()]);
    }

    let mut queue: VecDeque<String> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut parents: HashMap<String, String> = HashMap::new();

    queue.push_back(start.to_string());
    visited.insert(start.to_string());

    while let Some(current) = queue.pop_front() {
        if current == target {
            tracing::debug!(visited = visited.len(), "bfs_target_found");
            return reconstruct_path(start, target, &parents);
        }

        for edge in expand(provider, &current, opts)? {
            if visited.insert(edge.to.clone()) {
                parents.insert(edge.to.clone(), current.clone());
                queue.push_back(edge.to.clone());
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs_no_path");
    Ok(Vec::new())
}

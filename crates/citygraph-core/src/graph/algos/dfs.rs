use crate::error::Result;
use crate::graph::algos::shared::expand;
use crate::graph::types::{Edge, Path, TraversalOptions};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// One suspended node on the explicit DFS stack
struct Frame<'a> {
    neighbors: Vec<&'a Edge>,
    next: usize,
}

/// List every node reachable from `start` in depth-first pre-order.
///
/// Produces the same order as the recursive walk (visit, then recurse into
/// each unvisited neighbor in turn) but keeps its frames on the heap, so
/// long chains cannot overflow the call stack.
#[tracing::instrument(skip(provider, opts), fields(start = %start, order = ?opts.neighbor_order))]
pub fn dfs_traverse(
    provider: &dyn GraphProvider,
    start: &str,
    opts: &TraversalOptions,
) -> Result<Path> {
    let mut output: Path = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    visited.insert(start);
    output.push(start.to_string());
    stack.push(Frame {
        neighbors: expand(provider, start, opts)?,
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(edge) = frame.neighbors.get(frame.next).copied() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if visited.insert(edge.to.as_str()) {
            output.push(edge.to.clone());
            stack.push(Frame {
                neighbors: expand(provider, &edge.to, opts)?,
                next: 0,
            });
        }
    }

    tracing::debug!(visited = output.len(), "dfs_complete");
    Ok(output)
}

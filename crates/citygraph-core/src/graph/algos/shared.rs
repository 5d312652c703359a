use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, NeighborOrder, TraversalOptions};
use crate::graph::GraphProvider;

/// Collect the edges to follow out of `id`, in the configured order.
///
/// A node without an adjacency entry is an `UnknownNode` error under
/// `strict_nodes`, and a sink otherwise.
pub fn expand<'a>(
    provider: &'a dyn GraphProvider,
    id: &str,
    opts: &TraversalOptions,
) -> Result<Vec<&'a Edge>> {
    let edges = match provider.neighbors(id) {
        Some(edges) => edges,
        None if opts.strict_nodes => return Err(GraphError::unknown_node(id)),
        None => {
            tracing::debug!(node = %id, "no adjacency entry, treating as sink");
            return Ok(Vec::new());
        }
    };

    let mut neighbors: Vec<&Edge> = edges.iter().collect();
    if opts.neighbor_order == NeighborOrder::Lexical {
        neighbors.sort_by(|a, b| a.to.cmp(&b.to));
    }
    Ok(neighbors)
}

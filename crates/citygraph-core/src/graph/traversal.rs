use crate::graph::types::{Edge, Graph};

/// Trait for providing graph adjacency
pub trait GraphProvider {
    /// Outgoing edges of `id`, or `None` when `id` has no adjacency entry
    fn neighbors(&self, id: &str) -> Option<&[Edge]>;
    /// Every node with an adjacency entry, in canonical order
    fn node_ids(&self) -> Vec<&str>;
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        Graph::neighbors(self, id)
    }

    fn node_ids(&self) -> Vec<&str> {
        self.nodes().collect()
    }
}

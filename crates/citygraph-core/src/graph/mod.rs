//! Graph store and traversal operations
//!
//! Provides the algorithms run against a loaded distance table:
//! - BFS path-finding (fewest hops)
//! - DFS reachability traversal
//! - Dijkstra path-finding (least total weight)
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{bfs_find_path, dfs_traverse, dijkstra_find_path, run};
pub use path::{path_cost, reconstruct_path};
pub use traversal::GraphProvider;
pub use types::{
    Algorithm, Edge, Graph, NeighborOrder, Path, TraversalOptions, TraversalOutcome,
    TraversalRequest, UnreachedTarget, Weight, Distance,
};

use crate::error::{GraphError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Non-negative cost of moving between two adjacent nodes
pub type Weight = u32;

/// Cumulative weight along a path; wide enough that no sum of `Weight`s
/// reaches [`UNREACHED`]
pub type Distance = u64;

/// Ordered node identifiers from start to target inclusive
pub type Path = Vec<String>;

/// Distance sentinel for nodes not yet reached
pub const UNREACHED: Distance = Distance::MAX;

/// A weighted, directed edge to a neighbor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub to: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: impl Into<String>, weight: Weight) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }
}

/// Immutable adjacency store built once at load time.
///
/// Nodes and each node's neighbors keep the order in which they were
/// declared in the input document. Traversals rely on this order to be
/// reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<(String, Vec<Edge>)>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, [(neighbor, weight)])` entries.
    ///
    /// A node declared twice keeps its first position and its last
    /// adjacency list; the same holds for a neighbor repeated inside one
    /// adjacency list.
    pub fn from_entries<I, N, A, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: IntoIterator<Item = (T, Weight)>,
        T: Into<String>,
    {
        let mut graph = Graph::new();
        for (id, adjacency) in entries {
            let edges = dedup_edges(
                adjacency
                    .into_iter()
                    .map(|(to, weight)| Edge::new(to, weight)),
            );
            graph.insert_node(id.into(), edges);
        }
        graph
    }

    fn insert_node(&mut self, id: String, edges: Vec<Edge>) {
        match self.index.get(&id) {
            Some(&slot) => self.nodes[slot].1 = edges,
            None => {
                self.index.insert(id.clone(), self.nodes.len());
                self.nodes.push((id, edges));
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Outgoing edges of `id`, or `None` when `id` has no adjacency entry
    pub fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        self.index
            .get(id)
            .map(|&slot| self.nodes[slot].1.as_slice())
    }

    /// Node identifiers in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|(id, _)| id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|(_, edges)| edges.len()).sum()
    }

    /// Weight of the edge `from -> to`, if present
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.neighbors(from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Sum of edge weights along `path`
    pub fn path_cost(&self, path: &[String]) -> Result<Distance> {
        super::path::path_cost(self, path)
    }

    /// Neighbor keys that never appear as a top-level node, in declaration order
    pub fn dangling_neighbors(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.nodes
            .iter()
            .flat_map(|(_, edges)| edges.iter())
            .filter(|edge| !self.contains(&edge.to))
            .filter(|edge| seen.insert(edge.to.as_str()))
            .map(|edge| edge.to.as_str())
            .collect()
    }
}

fn dedup_edges(edges: impl Iterator<Item = Edge>) -> Vec<Edge> {
    let mut out: Vec<Edge> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for edge in edges {
        match slots.get(&edge.to) {
            Some(&slot) => out[slot].weight = edge.weight,
            None => {
                slots.insert(edge.to.clone(), out.len());
                out.push(edge);
            }
        }
    }
    out
}

struct Adjacency<'a>(&'a [Edge]);

impl Serialize for Adjacency<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for edge in self.0 {
            map.serialize_entry(&edge.to, &edge.weight)?;
        }
        map.end()
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for (id, edges) in &self.nodes {
            map.serialize_entry(id, &Adjacency(edges))?;
        }
        map.end()
    }
}

/// Adjacency list read in document order
struct OrderedEdges(Vec<Edge>);

impl<'de> Deserialize<'de> for OrderedEdges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EdgesVisitor;

        impl<'de> Visitor<'de> for EdgesVisitor {
            type Value = OrderedEdges;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping neighbor names to non-negative weights")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut edges = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((to, weight)) = map.next_entry::<String, Weight>()? {
                    edges.push(Edge::new(to, weight));
                }
                Ok(OrderedEdges(dedup_edges(edges.into_iter())))
            }
        }

        deserializer.deserialize_map(EdgesVisitor)
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct GraphVisitor;

        impl<'de> Visitor<'de> for GraphVisitor {
            type Value = Graph;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping node names to adjacency objects")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut graph = Graph::new();
                while let Some((id, OrderedEdges(edges))) =
                    map.next_entry::<String, OrderedEdges>()?
                {
                    graph.insert_node(id, edges);
                }
                Ok(graph)
            }
        }

        deserializer.deserialize_map(GraphVisitor)
    }
}

/// Traversal algorithm selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    /// Whether the algorithm searches for a specific target node
    pub fn needs_target(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(GraphError::BadArguments(format!(
                "unknown algorithm: {} (expected: bfs, dfs, or dijkstra)",
                other
            ))),
        }
    }
}

/// Order in which a node's neighbors are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborOrder {
    /// Order of declaration in the input document
    #[default]
    Declared,
    /// Sorted by neighbor identifier
    Lexical,
}

/// What Dijkstra returns when the target was never reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreachedTarget {
    /// Surface the broken parent chain as `MissingParentLink`
    #[default]
    Fail,
    /// Return an empty path, matching BFS
    Empty,
}

impl FromStr for NeighborOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "declared" => Ok(NeighborOrder::Declared),
            "lexical" => Ok(NeighborOrder::Lexical),
            other => Err(GraphError::BadArguments(format!(
                "unknown neighbor order: {} (expected: declared or lexical)",
                other
            ))),
        }
    }
}

impl FromStr for UnreachedTarget {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(UnreachedTarget::Fail),
            "empty" => Ok(UnreachedTarget::Empty),
            other => Err(GraphError::BadArguments(format!(
                "unknown unreached-target policy: {} (expected: fail or empty)",
                other
            ))),
        }
    }
}

/// Options shared by all traversal algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalOptions {
    pub neighbor_order: NeighborOrder,
    pub unreached_target: UnreachedTarget,
    /// Expanding a node without an adjacency entry is an error when set;
    /// otherwise such nodes are sinks
    pub strict_nodes: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            neighbor_order: NeighborOrder::Declared,
            unreached_target: UnreachedTarget::Fail,
            strict_nodes: true,
        }
    }
}

/// A single traversal to run against a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    pub algorithm: Algorithm,
    pub start: String,
    pub target: Option<String>,
}

/// Result of running a [`TraversalRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalOutcome {
    pub algorithm: Algorithm,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub path: Path,
    /// Total edge weight of `path`; absent for DFS and for empty paths
    pub cost: Option<Distance>,
}

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::expand;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Distance, Path, TraversalOptions, UnreachedTarget, UNREACHED};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then
/// push order so equal distances pop first-in first-out)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub distance: Distance,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    distances: HashMap<String, Distance>,
    parents: HashMap<String, String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pushed: u64,
    stale: usize,
}

impl DijkstraState {
    fn new(provider: &dyn GraphProvider, start: &str) -> Self {
        let mut distances: HashMap<String, Distance> = provider
            .node_ids()
            .into_iter()
            .map(|id| (id.to_string(), UNREACHED))
            .collect();
        distances.insert(start.to_string(), 0);

        let mut state = Self {
            distances,
            parents: HashMap::new(),
            heap: BinaryHeap::new(),
            pushed: 0,
            stale: 0,
        };
        state.push(start.to_string(), 0);
        state
    }

    fn push(&mut self, node_id: String, distance: Distance) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            seq: self.pushed,
        }));
        self.pushed += 1;
    }

    /// Best known distance to `id`; nodes outside the distance map are only
    /// tolerated when `strict_nodes` is off
    fn distance(&self, id: &str, opts: &TraversalOptions) -> Result<Distance> {
        match self.distances.get(id) {
            Some(&distance) => Ok(distance),
            None if opts.strict_nodes => Err(GraphError::unknown_node(id)),
            None => Ok(UNREACHED),
        }
    }
}

/// Find the least-weight path from `start` to `target`.
///
/// Lazy-deletion Dijkstra: improved distances are pushed as new heap
/// entries and stale ones are skipped when popped. The whole reachable
/// component is settled before the path is rebuilt.
///
/// When `target` is never reached the outcome depends on
/// `opts.unreached_target`: `Fail` surfaces `MissingParentLink`, `Empty`
/// returns an empty path.
#[tracing::instrument(skip(provider, opts), fields(start = %start, target = %target, unreached = ?opts.unreached_target))]
pub fn dijkstra_find_path(
    provider: &dyn GraphProvider,
    start: &str,
    target: &str,
    opts: &TraversalOptions,
) -> Result<Path> {
    let mut state = DijkstraState::new(provider, start);

    while let Some(Reverse(HeapEntry {
        node_id: current,
        distance,
        ..
    })) = state.heap.pop()
    {
        if distance > state.distance(&current, opts)? {
            state.stale += 1;
            continue;
        }

        for edge in expand(provider, &current, opts)? {
            let candidate = distance + Distance::from(edge.weight);
            if candidate < state.distance(&edge.to, opts)? {
                state.distances.insert(edge.to.clone(), candidate);
                state.parents.insert(edge.to.clone(), current.clone());
                state.push(edge.to.clone(), candidate);
            }
        }
    }

    tracing::debug!(
        settled = state.parents.len() + 1,
        pushed = state.pushed,
        stale = state.stale,
        "dijkstra_drained"
    );

    let reached = target == start || state.parents.contains_key(target);
    if !reached && opts.unreached_target == UnreachedTarget::Empty {
        return Ok(Vec::new());
    }
    reconstruct_path(start, target, &state.parents)
}

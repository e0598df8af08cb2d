use crate::algorithm::ShortestPathSolver;
use crate::data_structures::MinPriorityQueue;
use crate::graph::{AdjacencyList, Weight};

/// Dijkstra's algorithm over per-node adjacency lists.
///
/// A min-priority queue keyed by tentative distance drives the greedy
/// expansion. All edge costs must be non-negative; that is a precondition,
/// checked only in debug builds. O(E log V).
#[derive(Debug, Clone)]
pub struct Dijkstra<W>
where
    W: Weight,
{
    graph: AdjacencyList<W>,
    inf: W,
}

impl<W> Default for Dijkstra<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Dijkstra<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_infinity(W::infinity())
    }

    /// Pre-sizes the adjacency lists for ids in `[0, vertices)`.
    pub fn with_capacity(vertices: usize) -> Self {
        Dijkstra {
            graph: AdjacencyList::with_capacity(vertices),
            inf: W::infinity(),
        }
    }

    /// Uses `inf` instead of the weight type's default sentinel.
    pub fn with_infinity(inf: W) -> Self {
        Dijkstra {
            graph: AdjacencyList::new(),
            inf,
        }
    }
}

impl<W> ShortestPathSolver<W> for Dijkstra<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W) {
        self.add_directed_edge(from, to, cost);
        self.graph.push_directed(to, from, cost);
    }

    fn add_directed_edge(&mut self, from: usize, to: usize, cost: W) {
        debug_assert!(cost >= W::zero(), "negative cost {:?} under Dijkstra", cost);
        self.graph.push_directed(from, to, cost);
    }

    fn shortest_path(&mut self, from: usize) -> Vec<W> {
        debug_assert!(self.graph.contains_vertex(from), "unknown source {}", from);

        let n = self.graph.vertex_count();
        let mut dists = vec![self.inf; n];
        dists[from] = W::zero();

        let mut queue = MinPriorityQueue::new();
        queue.push(W::zero(), from);

        while let Some((dist_v, v)) = queue.pop() {
            // A cheaper entry for v was already finalized; this one is stale.
            if dists[v] < dist_v {
                continue;
            }
            for &(to, cost) in self.graph.neighbors(v) {
                if dists[to] > dists[v] + cost {
                    dists[to] = dists[v] + cost;
                    queue.push(dists[to], to);
                }
            }
        }

        dists
    }
}

use crate::algorithm::{SpanningTree, SpanningTreeSolver};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{AdjacencyList, Edge, Weight};

/// Prim's algorithm over per-node adjacency lists.
///
/// Grows the tree from the lowest seen node by repeatedly taking the
/// cheapest edge crossing the visited boundary off a min-priority queue.
/// The root enters the queue as a parentless zero-cost entry, so it is
/// claimed like any other node without contributing an output edge.
/// O(E log V).
#[derive(Debug, Clone)]
pub struct Prim<W>
where
    W: Weight,
{
    graph: AdjacencyList<W>,
}

impl<W> Default for Prim<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Prim<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Prim {
            graph: AdjacencyList::new(),
        }
    }

    /// Pre-sizes the adjacency lists for ids in `[0, vertices)`.
    pub fn with_capacity(vertices: usize) -> Self {
        Prim {
            graph: AdjacencyList::with_capacity(vertices),
        }
    }
}

impl<W> SpanningTreeSolver<W> for Prim<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W) {
        self.graph.push_directed(from, to, cost);
        self.graph.push_directed(to, from, cost);
    }

    fn solve(&self) -> SpanningTree<W> {
        let capacity = self.graph.capacity();
        let mut total_cost = W::zero();
        let mut edges = Vec::new();

        let root = match (0..capacity).find(|&v| self.graph.contains_vertex(v)) {
            Some(v) => v,
            None => {
                return SpanningTree { total_cost, edges };
            }
        };

        let mut visited = vec![false; capacity];
        let mut queue = MinPriorityQueue::new();
        queue.push(W::zero(), (None, root));

        while let Some((cost, (from, to))) = queue.pop() {
            if visited[to] {
                continue;
            }
            visited[to] = true;
            if let Some(from) = from {
                total_cost = total_cost + cost;
                edges.push(Edge::new(from, to, cost));
            }
            for &(next, next_cost) in self.graph.neighbors(to) {
                if !visited[next] {
                    queue.push(next_cost, (Some(to), next));
                }
            }
        }

        SpanningTree { total_cost, edges }
    }
}

use log::trace;

use crate::algorithm::{SpanningTree, SpanningTreeSolver};
use crate::data_structures::DisjointSet;
use crate::graph::{AdjacencyList, Weight};

/// Kruskal's algorithm over per-node adjacency lists.
///
/// Flattens the stored arcs into one list, sorts it ascending by cost, and
/// accepts each edge whose endpoints a disjoint-set forest does not already
/// connect. Undirected insertion stores both arcs; the reciprocal copy of
/// an accepted edge always joins two already-united endpoints, so it is
/// skipped like any other cycle edge. O(E log E).
#[derive(Debug, Clone)]
pub struct Kruskal<W>
where
    W: Weight,
{
    graph: AdjacencyList<W>,
}

impl<W> Default for Kruskal<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Kruskal<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Kruskal {
            graph: AdjacencyList::new(),
        }
    }

    /// Pre-sizes the adjacency lists for ids in `[0, vertices)`.
    pub fn with_capacity(vertices: usize) -> Self {
        Kruskal {
            graph: AdjacencyList::with_capacity(vertices),
        }
    }
}

impl<W> SpanningTreeSolver<W> for Kruskal<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W) {
        self.graph.push_directed(from, to, cost);
        self.graph.push_directed(to, from, cost);
    }

    fn solve(&self) -> SpanningTree<W> {
        let mut all_edges: Vec<_> = self.graph.edges().collect();
        all_edges.sort_unstable_by_key(|e| e.cost);

        let mut forest = DisjointSet::new(self.graph.capacity());
        let mut total_cost = W::zero();
        let mut edges = Vec::new();

        for e in all_edges {
            if forest.is_same(e.from, e.to) {
                continue;
            }
            forest.unite(e.from, e.to);
            total_cost = total_cost + e.cost;
            edges.push(e);
        }

        trace!("kruskal accepted {} of {} arcs", edges.len(), self.graph.edge_count());
        SpanningTree { total_cost, edges }
    }
}

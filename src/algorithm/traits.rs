use crate::graph::{Edge, Weight};

/// Capability contract shared by the single-source/all-pairs solvers.
///
/// A solver accumulates edges, then answers distance queries. Variants are
/// interchangeable by substitution: callers pick one based on graph
/// density, weight sign, and whether all-pairs results are needed, and the
/// contract stays the same. Queries take `&mut self` because the all-pairs
/// variant relaxes its matrix in place when asked.
pub trait ShortestPathSolver<W>
where
    W: Weight,
{
    /// Inserts an undirected edge as a pair of reciprocal directed arcs.
    fn add_edge(&mut self, from: usize, to: usize, cost: W);

    /// Inserts one directed arc.
    fn add_directed_edge(&mut self, from: usize, to: usize, cost: W);

    /// Distances from `from` to every seen node, in node-id order.
    ///
    /// An entry equals the solver's sentinel iff that node is unreachable
    /// from `from`. The source must have been inserted as an edge endpoint
    /// beforehand; an unknown source is undefined behavior.
    fn shortest_path(&mut self, from: usize) -> Vec<W>;

    /// Single-pair distance, extracted from the full source row.
    fn distance(&mut self, from: usize, to: usize) -> W {
        self.shortest_path(from)[to]
    }

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// A solved spanning tree (or forest, for disconnected input).
#[derive(Debug, Clone)]
pub struct SpanningTree<W>
where
    W: Weight,
{
    /// Sum of the selected edge costs.
    pub total_cost: W,

    /// The selected edges, in the order the solver accepted them.
    pub edges: Vec<Edge<W>>,
}

/// Capability contract shared by the minimum-spanning-tree solvers.
pub trait SpanningTreeSolver<W>
where
    W: Weight,
{
    /// Inserts an undirected edge as a pair of reciprocal directed arcs.
    fn add_edge(&mut self, from: usize, to: usize, cost: W);

    /// Computes a minimum spanning tree over everything inserted so far.
    ///
    /// Disconnected input yields a minimum spanning forest with fewer than
    /// `V - 1` edges; an empty solver yields an empty, zero-cost tree.
    fn solve(&self) -> SpanningTree<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

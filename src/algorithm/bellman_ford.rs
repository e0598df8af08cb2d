use log::debug;

use crate::algorithm::ShortestPathSolver;
use crate::graph::{EdgeList, Weight};

/// Bellman-Ford over a flat edge list.
///
/// Scans every edge per pass and relaxes to a fixed point, which makes it
/// the only variant here that is correct with negative edge costs. Passes
/// are capped at the vertex count, the standard sufficient bound, so a
/// negative cycle cannot hang the query; distances produced under a
/// negative cycle are unspecified. O(V·E).
#[derive(Debug, Clone)]
pub struct BellmanFord<W>
where
    W: Weight,
{
    graph: EdgeList<W>,
    inf: W,
}

impl<W> Default for BellmanFord<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> BellmanFord<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_infinity(W::infinity())
    }

    /// Uses `inf` instead of the weight type's default sentinel.
    pub fn with_infinity(inf: W) -> Self {
        BellmanFord {
            graph: EdgeList::new(),
            inf,
        }
    }
}

impl<W> ShortestPathSolver<W> for BellmanFord<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "BellmanFord"
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W) {
        self.add_directed_edge(from, to, cost);
        self.graph.push_directed(to, from, cost);
    }

    fn add_directed_edge(&mut self, from: usize, to: usize, cost: W) {
        self.graph.push_directed(from, to, cost);
    }

    fn shortest_path(&mut self, from: usize) -> Vec<W> {
        debug_assert!(self.graph.contains_vertex(from), "unknown source {}", from);

        let n = self.graph.vertex_count();
        let mut dists = vec![self.inf; n];
        dists[from] = W::zero();

        for pass in 0..n {
            let mut updated = false;
            for e in self.graph.edges() {
                if dists[e.from] != self.inf && dists[e.to] > dists[e.from] + e.cost {
                    dists[e.to] = dists[e.from] + e.cost;
                    updated = true;
                }
            }
            if !updated {
                debug!("bellman-ford fixed point after {} passes", pass + 1);
                break;
            }
        }

        dists
    }
}

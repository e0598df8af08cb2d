use crate::algorithm::ShortestPathSolver;
use crate::graph::{DistanceMatrix, Weight};

/// Floyd-Warshall over a dense distance matrix.
///
/// One query relaxes the whole matrix through every intermediate node and
/// then extracts the source's row, so all-pairs results cost a single
/// O(N³) pass and later queries only pay the (idempotent) re-relaxation of
/// an already converged matrix. The matrix is overwritten in place: raw
/// edge costs are gone after the first query.
#[derive(Debug, Clone)]
pub struct FloydWarshall<W>
where
    W: Weight,
{
    graph: DistanceMatrix<W>,
}

impl<W> FloydWarshall<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_infinity(W::infinity())
    }

    /// Pre-sizes the matrix for ids in `[0, vertices)`.
    pub fn with_capacity(vertices: usize) -> Self {
        FloydWarshall {
            graph: DistanceMatrix::with_capacity(vertices, W::infinity()),
        }
    }

    /// Uses `inf` instead of the weight type's default sentinel.
    ///
    /// The sentinel must exceed every achievable path cost, or reachable
    /// pairs will read as unreachable.
    pub fn with_infinity(inf: W) -> Self {
        FloydWarshall {
            graph: DistanceMatrix::new(inf),
        }
    }

    /// Runs the all-pairs relaxation to its fixed point.
    ///
    /// Sentinel operands are skipped rather than added: with negative edge
    /// costs, `inf + cost` would drift below the sentinel and turn an
    /// unreachable pair into a bogus finite-looking distance.
    fn relax(&mut self) {
        let inf = self.graph.infinity();
        let n = self.graph.size();
        for k in 0..n {
            for i in 0..n {
                let ik = self.graph.get(i, k);
                if ik == inf {
                    continue;
                }
                for j in 0..n {
                    let kj = self.graph.get(k, j);
                    if kj == inf {
                        continue;
                    }
                    let through = ik + kj;
                    if through < self.graph.get(i, j) {
                        self.graph.set(i, j, through);
                    }
                }
            }
        }
    }
}

impl<W> Default for FloydWarshall<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ShortestPathSolver<W> for FloydWarshall<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "FloydWarshall"
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

        self.relax();
        (0..self.graph.vertex_count())
            .map(|to| self.graph.get(from, to))
            .collect()
    }
}

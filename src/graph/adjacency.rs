use std::collections::HashSet;

use log::trace;

use crate::graph::{Edge, Weight};

/// Per-node outgoing-arc lists, indexed directly by node id.
///
/// The list vector grows lazily as edges naming larger ids arrive, so the
/// indexable capacity can exceed the number of seen nodes. Queries size
/// their results from the seen-node count, not the capacity.
#[derive(Debug, Clone)]
pub struct AdjacencyList<W>
where
    W: Weight,
{
    lists: Vec<Vec<(usize, W)>>,
    vertices: HashSet<usize>,
}

impl<W> AdjacencyList<W>
where
    W: Weight,
{
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        AdjacencyList {
            lists: Vec::new(),
            vertices: HashSet::new(),
        }
    }

    /// Creates an adjacency list pre-sized for ids in `[0, vertices)`.
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyList {
            lists: vec![Vec::new(); vertices],
            vertices: HashSet::with_capacity(vertices),
        }
    }

    /// Grows the indexable id range to include `vertex`.
    ///
    /// Growth is an explicit operation so the allocation cost stays visible
    /// at the insertion sites instead of hiding inside indexing.
    pub fn ensure_vertex(&mut self, vertex: usize) {
        if vertex >= self.lists.len() {
            trace!(
                "growing adjacency list capacity {} -> {}",
                self.lists.len(),
                vertex + 1
            );
            self.lists.resize(vertex + 1, Vec::new());
        }
    }

    /// Appends one directed arc and records both endpoints as seen.
    pub fn push_directed(&mut self, from: usize, to: usize, cost: W) {
        self.ensure_vertex(from.max(to));
        self.vertices.insert(from);
        self.vertices.insert(to);
        self.lists[from].push((to, cost));
    }

    /// Number of distinct node ids seen so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Largest indexable id plus one (lazily grown, may exceed `vertex_count`).
    pub fn capacity(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Outgoing arcs of `vertex`; empty for ids never named by an edge.
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.lists.get(vertex).map_or(&[], |list| list.as_slice())
    }

    /// All stored arcs in insertion order per node, flattened.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.lists.iter().enumerate().flat_map(|(from, list)| {
            list.iter()
                .map(move |&(to, cost)| Edge::new(from, to, cost))
        })
    }
}

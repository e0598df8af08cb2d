//! Interchangeable graph solvers over specialized per-solver storage.
//!
//! This library provides a family of shortest-path solvers (Bellman-Ford,
//! Dijkstra, Floyd-Warshall) and minimum-spanning-tree solvers (Prim,
//! Kruskal) behind two small capability contracts. Each solver owns the
//! storage layout its access pattern wants (a flat edge list, per-node
//! adjacency lists, or a dense distance matrix), so there is no single
//! shared graph type; callers pick a variant, feed it edges, and query it.
//!
//! Precondition violations (out-of-range node ids, negative edge costs
//! under Dijkstra) are undefined behavior by contract and only checked by
//! debug assertions, keeping the hot relaxation loops free of bounds
//! checks the caller never needs.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    kruskal::Kruskal, prim::Prim, ShortestPathSolver, SpanningTree, SpanningTreeSolver,
};
/// Re-export main types for convenient use
pub use data_structures::DisjointSet;
pub use graph::{Edge, Weight};

use std::collections::HashSet;

use rand::prelude::*;

use crate::graph::Edge;

/// Generates a random connected undirected graph as an edge set.
///
/// The first `n - 1` edges form a random spanning tree (every node attaches
/// to a random earlier node), guaranteeing connectivity; up to `extra_edges`
/// random chords are added on top. Costs are uniform in `[1, max_cost]`.
/// Node pairs are never repeated, so every solver sees the same cost for a
/// pair regardless of how it stores parallel arcs. Edges are undirected:
/// feed each one to solvers via their `add_edge`.
pub fn random_connected(n: usize, extra_edges: usize, max_cost: i64) -> Vec<Edge<i64>> {
    assert!(n > 0, "n must be positive");
    assert!(max_cost > 0, "max_cost must be positive");

    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(n - 1 + extra_edges);
    let mut seen = HashSet::new();

    for to in 1..n {
        let from = rng.gen_range(0..to);
        let cost = rng.gen_range(1..=max_cost);
        seen.insert((from, to));
        edges.push(Edge::new(from, to, cost));
    }

    for _ in 0..extra_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to && seen.insert((from.min(to), from.max(to))) {
            let cost = rng.gen_range(1..=max_cost);
            edges.push(Edge::new(from, to, cost));
        }
    }

    edges
}

/// Generates a 4-connected `width`×`height` grid with unit costs.
///
/// Node `(x, y)` is `y * width + x`. Each adjacency is emitted once; the
/// reciprocal arc comes from undirected insertion.
pub fn grid(width: usize, height: usize) -> Vec<Edge<i64>> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push(Edge::new(vertex, vertex + 1, 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(vertex, vertex + width, 1));
            }
        }
    }

    edges
}

use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Weights drawn by the random generators lie in this range
const WEIGHT_RANGE: std::ops::Range<f64> = 1.0..100.0;

/// Generates a random directed graph with roughly `density * n * n` edges
///
/// Self-loops are skipped, so the final edge count can be slightly lower.
/// The same seed always produces the same graph.
pub fn generate_random_graph(n: usize, density: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let total_edges = (n as f64 * n as f64 * density.max(0.0)) as usize;
    for _ in 0..total_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(WEIGHT_RANGE));
            // Both endpoints are drawn from 0..n, so this cannot fail.
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a complete directed graph on `n` vertices with random weights
pub fn generate_complete_graph(n: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        for j in 0..n {
            if i != j {
                let weight = OrderedFloat(rng.gen_range(WEIGHT_RANGE));
                let _ = graph.add_edge(i, j, weight);
            }
        }
    }

    graph
}

/// Generates a 3D grid graph with dimensions x*y*z and unit weights
pub fn generate_3d_grid(x: usize, y: usize, z: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(x * y * z);

    // Helper function to get vertex index from 3D coordinates
    let get_index = |i: usize, j: usize, k: usize| -> usize { i * y * z + j * z + k };

    // 6-connectivity
    for i in 0..x {
        for j in 0..y {
            for k in 0..z {
                let current = get_index(i, j, k);
                let mut neighbors = Vec::with_capacity(6);

                if i > 0 {
                    neighbors.push(get_index(i - 1, j, k));
                }
                if i + 1 < x {
                    neighbors.push(get_index(i + 1, j, k));
                }
                if j > 0 {
                    neighbors.push(get_index(i, j - 1, k));
                }
                if j + 1 < y {
                    neighbors.push(get_index(i, j + 1, k));
                }
                if k > 0 {
                    neighbors.push(get_index(i, j, k - 1));
                }
                if k + 1 < z {
                    neighbors.push(get_index(i, j, k + 1));
                }

                for neighbor in neighbors {
                    let _ = graph.add_edge(current, neighbor, OrderedFloat(1.0));
                }
            }
        }
    }

    graph
}

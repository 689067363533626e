use log::debug;

use crate::algorithm::traits::{validate_run, VertexStatus, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FibonacciHeap, NodeHandle};
use crate::graph::Graph;
use crate::Result;

/// Single-threaded Dijkstra over a Fibonacci heap
///
/// Every vertex is inserted up front keyed by its tentative distance, so each
/// improvement is a `decrease_key` on an existing node.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialStrategy;

impl SequentialStrategy {
    /// Creates a new sequential strategy
    pub fn new() -> Self {
        SequentialStrategy
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for SequentialStrategy
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Sequential Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        validate_run::<W, G>(graph, source)?;

        let n = graph.vertex_count();
        debug!(
            "sequential run: {} vertices, {} edges, source {}",
            n,
            graph.edge_count(),
            source
        );

        let mut distance = vec![W::infinity(); n];
        let mut predecessor = vec![None; n];
        distance[source] = W::zero();

        let mut heap = FibonacciHeap::with_capacity(n);
        let handles: Vec<NodeHandle> = (0..n).map(|v| heap.insert(v, distance[v])).collect();
        let mut status = vec![VertexStatus::InHeap; n];

        while !heap.is_empty() {
            let (u, dist_u) = heap.extract_min()?;
            status[u] = VertexStatus::Finalized;

            // Everything left in the heap is unreachable too.
            if dist_u.is_infinite() {
                continue;
            }

            for edge in graph.outgoing_edges(u) {
                let v = edge.target;
                if status[v] == VertexStatus::Finalized {
                    continue;
                }

                let candidate = dist_u + edge.weight;
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                    heap.decrease_key(handles[v], candidate)?;
                }
            }
        }

        let result = ShortestPathResult {
            distance,
            predecessor,
            source,
        };
        debug!("sequential run finished: {} reachable", result.reachable_count());
        Ok(result)
    }
}

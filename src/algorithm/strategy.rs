use crate::algorithm::parallel_dijkstra::{ParallelConfig, ParallelDijkstraStrategy};
use crate::algorithm::sequential::SequentialStrategy;
use crate::algorithm::traits::Weight;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::Result;

/// The execution strategies a caller can pick from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded Dijkstra
    #[default]
    Sequential,
    /// Dijkstra with per-vertex edge relaxation on a thread pool
    ParallelDijkstra(ParallelConfig),
}

impl Strategy {
    /// Parallel strategy with `threads` workers and default chunking
    pub fn parallel(threads: usize) -> Self {
        Strategy::ParallelDijkstra(ParallelConfig::new(threads))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::ParallelDijkstra(_) => "parallel",
        }
    }
}

/// Computes shortest paths from `source` with the chosen strategy
///
/// Input problems (unknown source, negative weight, zero-sized pool) are
/// reported before any work starts; no partial result is ever returned.
pub fn run<W, G>(strategy: &Strategy, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    match strategy {
        Strategy::Sequential => SequentialStrategy::new().compute_shortest_paths(graph, source),
        Strategy::ParallelDijkstra(config) => {
            ParallelDijkstraStrategy::with_config(config.clone()).compute_shortest_paths(graph, source)
        }
    }
}

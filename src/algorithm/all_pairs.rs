use log::debug;
use rayon::prelude::*;

use crate::algorithm::parallel_dijkstra::ParallelDijkstraStrategy;
use crate::algorithm::sequential::SequentialStrategy;
use crate::algorithm::traits::{validate_run, Weight};
use crate::algorithm::{ShortestPathAlgorithm, Strategy};
use crate::graph::Graph;
use crate::{Result, VertexId};

/// Shortest distances between every ordered pair of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    rows: Vec<Vec<W>>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Number of vertices (rows and columns)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Distance from `from` to `to`, infinity when unreachable
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Distances from one source to every vertex
    pub fn row(&self, from: VertexId) -> Option<&[W]> {
        self.rows.get(from).map(Vec::as_slice)
    }
}

/// Runs `strategy` once from every vertex
///
/// The parallel strategy builds its pool once and reuses it for every source.
pub fn all_pairs<W, G>(strategy: &Strategy, graph: &G) -> Result<DistanceMatrix<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(DistanceMatrix { rows: Vec::new() });
    }
    validate_run::<W, G>(graph, 0)?;
    debug!("all pairs: {} sources, {} strategy", n, strategy.name());

    let rows = match strategy {
        Strategy::Sequential => {
            let sequential = SequentialStrategy::new();
            (0..n)
                .map(|s| sequential.compute_shortest_paths(graph, s).map(|r| r.distance))
                .collect::<Result<Vec<_>>>()?
        }
        Strategy::ParallelDijkstra(config) => {
            let parallel = ParallelDijkstraStrategy::with_config(config.clone());
            let pool = config.build_pool()?;
            let rows = (0..n)
                .map(|s| parallel.compute_with_pool(graph, s, &pool).map(|r| r.distance))
                .collect::<Result<Vec<_>>>();
            pool.shutdown();
            rows?
        }
    };

    Ok(DistanceMatrix { rows })
}

/// Runs sequential Dijkstra from every vertex, one source per rayon task
///
/// This parallelizes across sources instead of across the edges of a single
/// run, which pays off when there are many sources to answer.
pub fn all_pairs_parallel<W, G>(graph: &G) -> Result<DistanceMatrix<W>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(DistanceMatrix { rows: Vec::new() });
    }
    validate_run::<W, G>(graph, 0)?;
    debug!("all pairs across sources: {} sources on rayon", n);

    let rows = (0..n)
        .into_par_iter()
        .map(|s| SequentialStrategy::new().compute_shortest_paths(graph, s).map(|r| r.distance))
        .collect::<Result<Vec<_>>>()?;

    Ok(DistanceMatrix { rows })
}

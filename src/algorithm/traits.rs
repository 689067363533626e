use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result, VertexId};

/// Edge weight / distance type accepted by the shortest path strategies
///
/// `Ord` comes from wrappers such as `ordered_float::OrderedFloat`; `Send + Sync`
/// lets distances cross into the parallel strategy's worker threads.
pub trait Weight: Float + Zero + Debug + Copy + Ord + Send + Sync + 'static {}

impl<T> Weight for T where T: Float + Zero + Debug + Copy + Ord + Send + Sync + 'static {}

/// Lifecycle of a vertex during one Dijkstra run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStatus {
    /// Not yet discovered, no heap node
    Unvisited,
    /// Has a heap node with a tentative distance
    InHeap,
    /// Extracted; its distance is final
    Finalized,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, infinity when unreachable
    pub distance: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessor: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance.get(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_finite()).count()
    }

    /// Walks the predecessor chain back from `target` to the source
    ///
    /// Returns `None` for unreachable targets or if the chain is broken.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor[current]?;
            path.push(current);
            // A chain longer than the vertex count must contain a cycle
            if path.len() > self.predecessor.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}

/// Checks everything a run needs before any algorithmic work starts
pub(crate) fn validate_run<W, G>(graph: &G, source: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound(source));
    }
    graph.validate()
}

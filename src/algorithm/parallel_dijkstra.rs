use std::env;
use std::sync::Arc;
use std::thread;

use log::{debug, trace, warn};
use parking_lot::Mutex;

use crate::algorithm::traits::{validate_run, VertexStatus, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FibonacciHeap, NodeHandle, ThreadPool};
use crate::graph::{Edge, Graph};
use crate::{Error, Result, VertexId};

/// Default number of edges relaxed by one pool task
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Tuning for [`ParallelDijkstraStrategy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads in the pool
    pub threads: usize,
    /// Contiguous edges handed to a single relaxation task
    pub chunk_size: usize,
    /// Pending tasks the pool queue holds before `submit` blocks
    pub queue_capacity: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let threads = thread::available_parallelism().map_or(1, |n| n.get());
        ParallelConfig::new(threads)
    }
}

impl ParallelConfig {
    /// Configuration for a pool of `threads` workers
    pub fn new(threads: usize) -> Self {
        ParallelConfig {
            threads,
            chunk_size: DEFAULT_CHUNK_SIZE,
            queue_capacity: threads.saturating_mul(4).max(1),
        }
    }

    /// Default configuration with `SSSP_THREADS` / `SSSP_CHUNK_SIZE` overrides
    pub fn from_env() -> Result<Self> {
        let mut config = ParallelConfig::default();
        if let Some(threads) = read_env_usize("SSSP_THREADS")? {
            config = ParallelConfig::new(threads).with_chunk_size(config.chunk_size);
        }
        if let Some(chunk_size) = read_env_usize("SSSP_CHUNK_SIZE")? {
            config.chunk_size = chunk_size;
        }
        Ok(config)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Rejects settings that cannot run
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidPoolSize(self.threads));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig("chunk size must be positive".into()));
        }
        if self.queue_capacity == 0 {
            return Err(Error::InvalidConfig("queue capacity must be positive".into()));
        }
        Ok(())
    }

    /// Builds a pool sized by this configuration
    pub fn build_pool(&self) -> Result<ThreadPool> {
        self.validate()?;
        if let Ok(available) = thread::available_parallelism() {
            if self.threads > available.get() {
                warn!(
                    "requested {} worker threads but only {} cores are available",
                    self.threads,
                    available.get()
                );
            }
        }
        ThreadPool::with_queue_capacity(self.threads, self.queue_capacity)
    }
}

fn read_env_usize(key: &str) -> Result<Option<usize>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidConfig(format!("{} must be a non-negative integer, got {:?}", key, raw))),
        Err(_) => Ok(None),
    }
}

/// Dijkstra whose edge relaxation fans out over a [`ThreadPool`]
///
/// Extract-min stays on the calling thread. The outgoing edges of each
/// extracted vertex are split into contiguous chunks, one pool task per
/// chunk, and the caller waits for the whole batch before the next
/// extract-min. Tasks serialize their writes through a per-vertex lock and
/// the run's heap lock, always taken in that order.
///
/// Vertices enter the heap only once discovered, and tasks of one batch reach
/// the heap in scheduling order. Distances always match [`SequentialStrategy`],
/// but vertices with equal keys may be finalized in a different order, so
/// predecessors on tied shortest paths can differ between the two.
///
/// [`SequentialStrategy`]: crate::SequentialStrategy
#[derive(Debug, Clone, Default)]
pub struct ParallelDijkstraStrategy {
    config: ParallelConfig,
}

/// Tentative state of one vertex, guarded by its own mutex
#[derive(Debug, Clone, Copy)]
struct Label<W> {
    distance: W,
    predecessor: Option<VertexId>,
    status: VertexStatus,
    handle: Option<NodeHandle>,
}

/// Mutable state shared by the orchestrator and the relaxation tasks of one run
struct RunState<W>
where
    W: Weight,
{
    heap: Mutex<FibonacciHeap<VertexId, W>>,
    labels: Vec<Mutex<Label<W>>>,
}

impl ParallelDijkstraStrategy {
    /// Creates a strategy running on `threads` workers
    pub fn new(threads: usize) -> Self {
        Self::with_config(ParallelConfig::new(threads))
    }

    pub fn with_config(config: ParallelConfig) -> Self {
        ParallelDijkstraStrategy { config }
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Runs on an existing pool, so several runs can share one set of workers
    pub fn compute_with_pool<W, G>(
        &self,
        graph: &G,
        source: usize,
        pool: &ThreadPool,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.config.validate()?;
        validate_run::<W, G>(graph, source)?;

        let n = graph.vertex_count();
        debug!(
            "parallel run: {} vertices, {} edges, source {}, {} workers (queue {}), chunk size {}",
            n,
            graph.edge_count(),
            source,
            pool.size(),
            pool.queue_capacity(),
            self.config.chunk_size
        );

        // Tasks must be 'static, so they read a shared snapshot of the adjacency lists.
        let adjacency: Arc<Vec<Vec<Edge<W>>>> =
            Arc::new((0..n).map(|v| graph.outgoing_edges(v).to_vec()).collect());

        let state = Arc::new(RunState::new(n, source));
        let chunk_size = self.config.chunk_size;

        loop {
            let extracted = {
                let mut heap = state.heap.lock();
                if heap.is_empty() {
                    break;
                }
                heap.extract_min()?
            };
            let (u, dist_u) = extracted;
            state.labels[u].lock().status = VertexStatus::Finalized;

            let degree = adjacency[u].len();
            if degree == 0 {
                continue;
            }

            let mut batch = Vec::with_capacity(degree.div_ceil(chunk_size));
            for start in (0..degree).step_by(chunk_size) {
                let end = start.saturating_add(chunk_size).min(degree);
                let state = Arc::clone(&state);
                let adjacency = Arc::clone(&adjacency);
                batch.push(pool.submit(move || {
                    relax_chunk(&state, &adjacency[u][start..end], u, dist_u)
                })?);
            }
            trace!("vertex {} at {:?}: {} edges in {} tasks", u, dist_u, degree, batch.len());

            // Wait for the whole batch so the next extract-min sees every update.
            let mut first_error = None;
            for task in batch {
                if let Err(e) = task.join().and_then(|outcome| outcome) {
                    first_error.get_or_insert(e);
                }
            }
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        let (distance, predecessor) = state
            .labels
            .iter()
            .map(|label| {
                let label = label.lock();
                (label.distance, label.predecessor)
            })
            .unzip();

        let result = ShortestPathResult {
            distance,
            predecessor,
            source,
        };
        debug!("parallel run finished: {} reachable", result.reachable_count());
        Ok(result)
    }
}

impl<W> RunState<W>
where
    W: Weight,
{
    fn new(n: usize, source: VertexId) -> Self {
        let mut heap = FibonacciHeap::with_capacity(n);
        let labels = (0..n)
            .map(|v| {
                let label = if v == source {
                    Label {
                        distance: W::zero(),
                        predecessor: None,
                        status: VertexStatus::InHeap,
                        handle: Some(heap.insert(v, W::zero())),
                    }
                } else {
                    Label {
                        distance: W::infinity(),
                        predecessor: None,
                        status: VertexStatus::Unvisited,
                        handle: None,
                    }
                };
                Mutex::new(label)
            })
            .collect();

        RunState {
            heap: Mutex::new(heap),
            labels,
        }
    }
}

/// Relaxes one chunk of `u`'s outgoing edges
///
/// Candidates are computed without touching shared state; each improved
/// target then gets exactly one heap mutation. Returns how many targets improved.
fn relax_chunk<W>(state: &RunState<W>, edges: &[Edge<W>], u: VertexId, dist_u: W) -> Result<usize>
where
    W: Weight,
{
    let mut candidates: Vec<(VertexId, W)> = edges
        .iter()
        .map(|edge| (edge.target, dist_u + edge.weight))
        .collect();
    // Parallel edges: keep only the best candidate per target.
    candidates.sort_unstable();
    candidates.dedup_by_key(|(target, _)| *target);

    let mut improved = 0;
    for (v, candidate) in candidates {
        let mut label = state.labels[v].lock();
        if label.status == VertexStatus::Finalized || !(candidate < label.distance) {
            continue;
        }

        label.distance = candidate;
        label.predecessor = Some(u);

        let mut heap = state.heap.lock();
        match label.handle {
            Some(handle) => heap.decrease_key(handle, candidate)?,
            None => {
                label.handle = Some(heap.insert(v, candidate));
                label.status = VertexStatus::InHeap;
            }
        }
        improved += 1;
    }
    Ok(improved)
}

impl<W, G> ShortestPathAlgorithm<W, G> for ParallelDijkstraStrategy
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Parallel Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        // Fail on bad input before paying for worker threads.
        self.config.validate()?;
        validate_run::<W, G>(graph, source)?;

        let pool = self.config.build_pool()?;
        let result = self.compute_with_pool(graph, source, &pool);
        pool.shutdown();
        result
    }
}

//! Fib SSSP - Single-Source Shortest Paths over a Fibonacci heap
//!
//! This library runs Dijkstra's algorithm on top of an arena-backed Fibonacci heap
//! and offers two interchangeable execution strategies: a sequential one and one that
//! fans out the edge relaxation of every extracted vertex across a fixed thread pool.
//!
//! Both strategies produce identical distance arrays for the same graph and source;
//! the parallel one only changes *when* relaxations are computed.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    all_pairs::{all_pairs, all_pairs_parallel, DistanceMatrix},
    parallel_dijkstra::{ParallelConfig, ParallelDijkstraStrategy},
    run,
    sequential::SequentialStrategy,
    ShortestPathAlgorithm, ShortestPathResult, Strategy,
};
pub use data_structures::{FibonacciHeap, NodeHandle, ThreadPool};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge};

/// Dense vertex identifier in `[0, vertex_count)`
pub type VertexId = usize;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Invalid thread pool size: {0}")]
    InvalidPoolSize(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Heap is empty")]
    EmptyHeap,

    #[error("New key is not smaller than the current key")]
    InvalidKey,

    #[error("Heap handle {0} does not refer to a node in the heap")]
    InvalidHandle(usize),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl Error {
    /// True for errors caused by the input graph or the requested source vertex
    pub fn is_invalid_graph(&self) -> bool {
        matches!(
            self,
            Error::InvalidVertex(_) | Error::NegativeWeight { .. } | Error::SourceNotFound(_)
        )
    }

    /// True for errors that can only come from a bug in the engine itself
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::EmptyHeap | Error::InvalidKey | Error::InvalidHandle(_) | Error::ThreadPool(_)
        )
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

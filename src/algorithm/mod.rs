pub mod traits;
pub mod sequential;
pub mod parallel_dijkstra;
pub mod strategy;
pub mod all_pairs;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, VertexStatus, Weight};
pub use strategy::{run, Strategy};

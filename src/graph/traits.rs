use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Edge;
use crate::{Error, Result};

/// Trait representing a weighted directed graph with dense vertex ids
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order
    ///
    /// Unknown vertices have no outgoing edges.
    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).iter().any(|e| e.target == to)
    }

    /// Gets the weight of the first edge between two vertices, if any
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    /// Fails on the first edge whose target is not a vertex of this graph,
    /// or whose weight is negative (or NaN)
    fn validate(&self) -> Result<()> {
        let n = self.vertex_count();
        for vertex in 0..n {
            for edge in self.outgoing_edges(vertex) {
                if edge.target >= n {
                    return Err(Error::InvalidVertex(edge.target));
                }
                edge.check_weight()?;
            }
        }
        Ok(())
    }

    /// Fails on the first edge with a negative (or NaN) weight
    fn validate_non_negative(&self) -> Result<()> {
        for vertex in 0..self.vertex_count() {
            for edge in self.outgoing_edges(vertex) {
                edge.check_weight()?;
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
///
/// Strategies only ever see a graph through `&G`, so a run can never mutate it.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between two existing vertices
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}

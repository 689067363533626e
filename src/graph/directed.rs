use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Edge;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists indexed by vertex id
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples
    ///
    /// Weights are stored as given; negative weights are only rejected when a
    /// strategy runs on the graph.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Iterates over every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Largest out-degree of any vertex
    pub fn max_out_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }

        self.adjacency[from].push(Edge::new(from, to, weight));
        self.edge_count += 1;
        Ok(())
    }
}

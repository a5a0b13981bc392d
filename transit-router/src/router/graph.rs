//! Directed weighted graph over dense vertex and edge indices.
//!
//! The graph knows nothing about stops or buses. Vertices are integers in
//! `0..vertex_count`, edges are numbered in insertion order, and each vertex
//! keeps the list of its outgoing edges.

use std::fmt;

/// Index of a graph vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v#{}", self.0)
    }
}

/// Index of a graph edge, assigned in insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e#{}", self.0)
    }
}

/// A directed edge with a weight in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its index.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        assert!(
            edge.from.0 < self.incidence.len() && edge.to.0 < self.incidence.len(),
            "edge {:?} -> {:?} outside graph of {} vertices",
            edge.from,
            edge.to,
            self.incidence.len()
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.incidence[edge.from.0].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex.0]
    }

    /// All edges with their indices.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }
}

//! Graph container
//!
//! Adjacency storage for small in-memory graphs. Directedness is fixed at
//! construction; undirected edges are stored symmetrically so traversal from
//! either endpoint sees the other. The algorithms only ever read from the
//! container.

use crate::error::{GraphError, Result};
use crate::graph::types::VertexLabel;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Weight assigned to edges added without an explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// A graph with optionally weighted edges
#[derive(Debug, Clone)]
pub struct Graph<V: VertexLabel> {
    directed: bool,
    /// Out-adjacency: vertex -> (neighbor -> edge weight)
    adjacency: HashMap<V, HashMap<V, f64>>,
    edge_count: usize,
}

impl<V: VertexLabel> Graph<V> {
    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Graph {
            directed: true,
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Build a graph from unweighted edges (weight 1 each)
    pub fn from_edges(edges: &[(V, V)], directed: bool) -> Self {
        let mut graph = if directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        for (u, v) in edges {
            graph.add_edge(u.clone(), v.clone());
        }
        graph
    }

    /// Build a graph from weighted edges
    pub fn from_weighted_edges(edges: &[(V, V, f64)], directed: bool) -> Self {
        let mut graph = if directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        for (u, v, weight) in edges {
            graph.add_edge_weighted(u.clone(), v.clone(), *weight);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if a vertex exists in the graph
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices, in label order
    pub fn vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        vertices.sort();
        vertices
    }

    /// Insert a vertex; inserting an existing label is a no-op
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Insert an edge with the default weight of 1
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_edge_weighted(u, v, DEFAULT_EDGE_WEIGHT);
    }

    /// Insert a weighted edge, inserting absent endpoints first.
    /// Re-adding an existing edge overwrites its weight.
    pub fn add_edge_weighted(&mut self, u: V, v: V, weight: f64) {
        let previous = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);

        if self.directed {
            self.adjacency.entry(v).or_default();
        } else {
            self.adjacency.entry(v).or_default().insert(u, weight);
        }

        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    /// Vertices directly reachable from `vertex` via one edge
    /// (out-edges only for directed graphs)
    pub fn neighbors(&self, vertex: &V) -> Result<BTreeSet<V>> {
        let edges = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
        Ok(edges.keys().cloned().collect())
    }

    /// Vertices with an edge into `vertex`
    /// (equal to `neighbors` for undirected graphs)
    pub fn in_neighbors(&self, vertex: &V) -> Result<BTreeSet<V>> {
        if !self.directed {
            return self.neighbors(vertex);
        }
        if !self.contains(vertex) {
            return Err(GraphError::vertex_not_found(vertex));
        }
        // Scan the forward adjacency; graphs are small enough that a
        // reverse index is not worth maintaining
        Ok(self
            .adjacency
            .iter()
            .filter(|(_, edges)| edges.contains_key(vertex))
            .map(|(source, _)| source.clone())
            .collect())
    }

    /// Weighted out-edges of `vertex`
    pub fn edges_from(&self, vertex: &V) -> Result<Vec<(V, f64)>> {
        let edges = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
        let mut edges: Vec<(V, f64)> = edges
            .iter()
            .map(|(neighbor, weight)| (neighbor.clone(), *weight))
            .collect();
        // Sort for determinism
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(edges)
    }

    /// Count of incident edges (undirected) or in-degree plus out-degree
    /// (directed)
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        let out_degree = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?
            .len();

        if self.directed {
            let in_degree = self
                .adjacency
                .values()
                .filter(|edges| edges.contains_key(vertex))
                .count();
            Ok(out_degree + in_degree)
        } else {
            Ok(out_degree)
        }
    }

    /// Degree of every vertex, in label order
    pub fn all_degrees(&self) -> BTreeMap<V, usize> {
        self.adjacency
            .keys()
            .map(|vertex| (vertex.clone(), self.degree(vertex).unwrap_or(0)))
            .collect()
    }
}

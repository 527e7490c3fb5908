use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Capabilities required of a vertex label.
///
/// Labels are opaque to the algorithms: equality and hashing feed the
/// visited sets, ordering drives the sorted-neighbor expansion, and display
/// feeds error messages and tracing fields. Strings, integers, and chars
/// all qualify.
pub trait VertexLabel: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> VertexLabel for T where T: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// Accumulated cost of a path (sum of edge weights along it)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PathCost(f64);

impl PathCost {
    pub const ZERO: PathCost = PathCost(0.0);

    pub fn new(cost: f64) -> Self {
        PathCost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for PathCost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add<f64> for PathCost {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        PathCost(self.0 + weight)
    }
}

impl From<f64> for PathCost {
    fn from(cost: f64) -> Self {
        PathCost(cost)
    }
}

/// Single-source shortest-path result
///
/// Unreachable vertices are absent from both maps. The maps are keyed in
/// label order so iteration over the result is reproducible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraResult<V: VertexLabel> {
    /// Vertex the distances are measured from
    pub source: V,
    /// Minimum total edge weight per reachable vertex
    pub distances: BTreeMap<V, f64>,
    /// One shortest path per reachable vertex, from the source inclusive
    pub paths: BTreeMap<V, Vec<V>>,
}

impl<V: VertexLabel> DijkstraResult<V> {
    /// Minimum total edge weight from the source, if `vertex` is reachable
    pub fn distance_to(&self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// One shortest path from the source, if `vertex` is reachable
    pub fn path_to(&self, vertex: &V) -> Option<&[V]> {
        self.paths.get(vertex).map(Vec::as_slice)
    }
}

/// Point-to-point shortest-path result
///
/// `found == false` means no path exists between the endpoints. That is a
/// normal outcome for path queries, so the struct always comes back to the
/// caller instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V: VertexLabel> {
    pub from: V,
    pub to: V,
    pub found: bool,
    /// Vertices from `from` to `to` inclusive; empty when not found
    pub path: Vec<V>,
    /// Total edge weight along `path`; 0.0 when not found
    pub distance: f64,
    /// Number of edges along `path`
    pub path_length: usize,
}

//! Graph construction and analysis
//!
//! Provides the graph container and the algorithms that consume it:
//! - Adjacency storage with optional edge weights and a directedness flag
//! - BFS and DFS traversal in deterministic first-visit order
//! - Dijkstra shortest paths (single-source and point-to-point)
//! - Cycle detection and connectivity queries

pub mod algos;
pub mod container;
pub mod path;
pub mod types;

pub use algos::{bfs_traverse, dfs_traverse, dijkstra_traverse, find_cycles, is_connected};
pub use container::Graph;
pub use path::shortest_path;
pub use types::{DijkstraResult, PathCost, PathResult, VertexLabel};

//! Graph algorithm implementations
//!
//! Contains concrete implementations of the graph algorithms:
//! - `bfs`: breadth-first traversal in first-visit order
//! - `dfs`: depth-first traversal in first-visit order
//! - `dijkstra`: single-source weighted shortest paths
//! - `cycles`: cycle basis / simple-cycle enumeration
//! - `connectivity`: connected and strongly connected queries

pub mod bfs;
pub mod connectivity;
pub mod cycles;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs_traverse;
pub use connectivity::is_connected;
pub use cycles::find_cycles;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_traverse;

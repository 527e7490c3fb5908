//! Breadth-first traversal

use crate::error::{GraphError, Result};
use crate::graph::container::Graph;
use crate::graph::types::VertexLabel;
use std::collections::{HashSet, VecDeque};

/// Visit every vertex reachable from `start` in level order.
///
/// Neighbors are expanded in label order, which makes the visitation
/// sequence deterministic regardless of internal storage order. Vertices
/// outside `start`'s component are simply absent from the result.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn bfs_traverse<V: VertexLabel>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    // Initialize with the start vertex
    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        // Neighbors come back sorted by label (the deterministic tie-break)
        for neighbor in graph.neighbors(&current)? {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_fixture() -> Graph<char> {
        Graph::from_weighted_edges(
            &[
                ('A', 'B', 2.0),
                ('A', 'C', 5.0),
                ('B', 'D', 4.0),
                ('B', 'E', 6.0),
                ('C', 'F', 3.0),
                ('D', 'G', 2.0),
                ('E', 'F', 4.0),
                ('F', 'G', 1.0),
            ],
            false,
        )
    }

    /// Test the visitation order on the weighted assignment fixture
    #[test]
    fn test_bfs_order_is_deterministic() {
        let graph = weighted_fixture();

        let order = bfs_traverse(&graph, &'A').unwrap();
        assert_eq!(order, vec!['A', 'B', 'C', 'D', 'E', 'F', 'G']);
    }

    /// Test that the first element is always the start vertex
    #[test]
    fn test_bfs_starts_at_start() {
        let graph = weighted_fixture();

        let order = bfs_traverse(&graph, &'F').unwrap();
        assert_eq!(order[0], 'F');
        assert_eq!(order.len(), 7);
    }

    /// Test that vertices outside the start component are absent
    #[test]
    fn test_bfs_skips_unreachable() {
        let mut graph = weighted_fixture();
        graph.add_vertex('Z');

        let order = bfs_traverse(&graph, &'A').unwrap();
        assert!(!order.contains(&'Z'));

        let isolated = bfs_traverse(&graph, &'Z').unwrap();
        assert_eq!(isolated, vec!['Z']);
    }

    /// Test that a missing start vertex is an error
    #[test]
    fn test_bfs_missing_start() {
        let graph = weighted_fixture();

        assert_eq!(
            bfs_traverse(&graph, &'X'),
            Err(GraphError::vertex_not_found('X'))
        );
    }
}

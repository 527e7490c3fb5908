//! Depth-first traversal

use crate::error::{GraphError, Result};
use crate::graph::container::Graph;
use crate::graph::types::VertexLabel;
use std::collections::HashSet;

/// Visit every vertex reachable from `start` in pre-order.
///
/// Expansion is depth-first, but the neighbor ordering rule is the same as
/// BFS: unvisited neighbors are taken in label order. An explicit stack
/// stands in for recursion so long paths cannot exhaust the call stack;
/// pushing neighbors in reverse label order makes the smallest one expand
/// first, reproducing the recursive visitation sequence exactly.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn dfs_traverse<V: VertexLabel>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<V> = vec![start.clone()];

    while let Some(current) = stack.pop() {
        // A vertex may sit on the stack more than once; only the first pop
        // counts
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());

        for neighbor in graph.neighbors(&current)?.into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

//! Connectivity queries

use crate::graph::container::Graph;
use crate::graph::types::VertexLabel;
use std::collections::{HashSet, VecDeque};

/// Whether every vertex can reach every other vertex.
///
/// Undirected graphs need a single sweep from any vertex. Directed graphs
/// are checked for strong connectivity: one sweep following the edges and
/// one sweep against them, both of which must cover the vertex set. The
/// empty graph reports connected.
#[tracing::instrument(skip(graph))]
pub fn is_connected<V: VertexLabel>(graph: &Graph<V>) -> bool {
    let vertices = graph.vertices();
    let Some(root) = vertices.first() else {
        return true;
    };

    if sweep(graph, root, false).len() != vertices.len() {
        return false;
    }
    if !graph.is_directed() {
        return true;
    }
    sweep(graph, root, true).len() == vertices.len()
}

/// Vertices reachable from `root`, following edges forward or in reverse
fn sweep<V: VertexLabel>(graph: &Graph<V>, root: &V, reverse: bool) -> HashSet<V> {
    let mut seen: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    seen.insert(root.clone());
    queue.push_back(root.clone());

    while let Some(current) = queue.pop_front() {
        let neighbors = if reverse {
            graph.in_neighbors(&current)
        } else {
            graph.neighbors(&current)
        };
        let Ok(neighbors) = neighbors else {
            continue;
        };
        for neighbor in neighbors {
            if seen.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    seen
}

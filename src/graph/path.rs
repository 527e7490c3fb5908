//! Point-to-point shortest path queries

use crate::error::{GraphError, Result};
use crate::graph::algos::dijkstra::HeapEntry;
use crate::graph::container::Graph;
use crate::graph::types::{PathCost, PathResult, VertexLabel};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Find the minimum-weight path between two vertices.
///
/// An unreachable `to` is a normal outcome, not an error: the result comes
/// back with `found == false`, an empty path, and zero distance.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path<V: VertexLabel>(graph: &Graph<V>, from: &V, to: &V) -> Result<PathResult<V>> {
    if !graph.contains(from) {
        return Err(GraphError::vertex_not_found(from));
    }
    if !graph.contains(to) {
        return Err(GraphError::vertex_not_found(to));
    }

    let (cost, predecessors) = dijkstra_search(graph, from, to)?;

    let Some(distance) = cost else {
        return Ok(create_empty_path_result(from, to));
    };

    let path = reconstruct_path(from, to, &predecessors);
    let path_length = path.len().saturating_sub(1);

    Ok(PathResult {
        from: from.clone(),
        to: to.clone(),
        found: true,
        path,
        distance,
        path_length,
    })
}

/// Dijkstra search that stops as soon as `to` is settled; returns its cost
/// (if reachable) and the predecessor map for path reconstruction
fn dijkstra_search<V: VertexLabel>(
    graph: &Graph<V>,
    from: &V,
    to: &V,
) -> Result<(Option<f64>, HashMap<V, V>)> {
    let mut best_costs: HashMap<V, f64> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut settled: HashSet<V> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();

    best_costs.insert(from.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        vertex: from.clone(),
        accumulated_cost: PathCost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
    })) = heap.pop()
    {
        // The target's first pop carries its final cost
        if current == *to {
            return Ok((Some(accumulated_cost.value()), predecessors));
        }
        if !settled.insert(current.clone()) {
            continue;
        }

        for (neighbor, weight) in graph.edges_from(&current)? {
            if settled.contains(&neighbor) {
                continue;
            }

            let new_cost = accumulated_cost + weight;
            let improved = best_costs
                .get(&neighbor)
                .is_none_or(|&existing| new_cost.value() < existing);

            if improved {
                best_costs.insert(neighbor.clone(), new_cost.value());
                predecessors.insert(neighbor.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor,
                    accumulated_cost: new_cost,
                }));
            }
        }
    }

    Ok((None, predecessors))
}

/// Backtrack from `to` through the predecessor map
fn reconstruct_path<V: VertexLabel>(from: &V, to: &V, predecessors: &HashMap<V, V>) -> Vec<V> {
    let mut path: Vec<V> = vec![to.clone()];
    let mut current = to;

    while current != from {
        if let Some(predecessor) = predecessors.get(current) {
            path.push(predecessor.clone());
            current = predecessor;
        } else {
            break;
        }
    }

    path.reverse();
    path
}

fn create_empty_path_result<V: VertexLabel>(from: &V, to: &V) -> PathResult<V> {
    PathResult {
        from: from.clone(),
        to: to.clone(),
        found: false,
        path: vec![],
        distance: 0.0,
        path_length: 0,
    }
}

//! Single-source weighted shortest paths

use crate::error::{GraphError, Result};
use crate::graph::container::Graph;
use crate::graph::types::{DijkstraResult, PathCost, VertexLabel};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as a min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub accumulated_cost: PathCost,
}

impl<V: PartialEq> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
            && self.accumulated_cost.value() == other.accumulated_cost.value()
    }
}

impl<V: PartialEq> Eq for HeapEntry<V> {}

impl<V: PartialEq> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: PartialEq> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
    }
}

/// Compute shortest distances and one realizing path from `source` to every
/// reachable vertex.
///
/// Classic priority-queue relaxation: tentative costs start at infinity
/// (absent from the map), the cheapest frontier vertex is settled on pop,
/// and its out-edges are relaxed. Edge weights must be non-negative;
/// behavior with negative weights is unspecified. Unreachable vertices are
/// absent from the result maps.
#[tracing::instrument(skip(graph), fields(source = %source))]
pub fn dijkstra_traverse<V: VertexLabel>(graph: &Graph<V>, source: &V) -> Result<DijkstraResult<V>> {
    if !graph.contains(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut best_costs: HashMap<V, f64> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut settled: HashSet<V> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();

    // Initialize with the source at cost zero
    best_costs.insert(source.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        vertex: source.clone(),
        accumulated_cost: PathCost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: current,
        accumulated_cost,
    })) = heap.pop()
    {
        // Stale heap entries are skipped; the first pop settles the vertex
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

    Ok(build_result(source, &best_costs, &predecessors))
}

/// Assemble the result maps, reconstructing one path per reachable vertex
/// by walking the predecessor map back to the source
fn build_result<V: VertexLabel>(
    source: &V,
    best_costs: &HashMap<V, f64>,
    predecessors: &HashMap<V, V>,
) -> DijkstraResult<V> {
    let mut distances: BTreeMap<V, f64> = BTreeMap::new();
    let mut paths: BTreeMap<V, Vec<V>> = BTreeMap::new();

    for (vertex, cost) in best_costs {
        distances.insert(vertex.clone(), *cost);

        let mut path: Vec<V> = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(predecessor) = predecessors.get(current) {
            path.push(predecessor.clone());
            current = predecessor;
        }
        path.reverse();
        paths.insert(vertex.clone(), path);
    }

    DijkstraResult {
        source: source.clone(),
        distances,
        paths,
    }
}

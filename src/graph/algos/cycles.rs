//! Cycle detection
//!
//! Undirected graphs get a cycle basis: a spanning forest is grown and each
//! non-tree edge contributes one fundamental cycle, joined at the lowest
//! common ancestor of its endpoints. Directed graphs get full simple-cycle
//! enumeration, which can be combinatorial on dense inputs; the expected
//! graphs are small.

use crate::graph::container::Graph;
use crate::graph::types::VertexLabel;
use std::collections::{HashMap, HashSet, VecDeque};

/// Find cycles: a cycle basis for undirected graphs, all simple cycles for
/// directed graphs. Each cycle is a vertex sequence without the closing
/// repeat. Acyclic graphs yield an empty Vec; the query never fails.
#[tracing::instrument(skip(graph))]
pub fn find_cycles<V: VertexLabel>(graph: &Graph<V>) -> Vec<Vec<V>> {
    if graph.is_directed() {
        simple_cycles(graph)
    } else {
        cycle_basis(graph)
    }
}

/// One fundamental cycle per non-tree edge of a spanning forest
fn cycle_basis<V: VertexLabel>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let mut cycles: Vec<Vec<V>> = Vec::new();
    let mut in_forest: HashSet<V> = HashSet::new();

    for root in graph.vertices() {
        if in_forest.contains(&root) {
            continue;
        }

        // Grow a spanning tree of this component, recording each non-tree
        // edge once (from its smaller endpoint)
        let mut parent: HashMap<V, V> = HashMap::new();
        let mut non_tree_edges: Vec<(V, V)> = Vec::new();
        let mut queue: VecDeque<V> = VecDeque::new();

        in_forest.insert(root.clone());
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let Ok(neighbors) = graph.neighbors(&current) else {
                continue;
            };
            for neighbor in neighbors {
                if in_forest.insert(neighbor.clone()) {
                    parent.insert(neighbor.clone(), current.clone());
                    queue.push_back(neighbor);
                } else if parent.get(&current) != Some(&neighbor) && current < neighbor {
                    non_tree_edges.push((current.clone(), neighbor));
                }
            }
        }

        for (u, v) in non_tree_edges {
            cycles.push(fundamental_cycle(&parent, &u, &v));
        }
    }

    cycles
}

/// Join the tree paths of a non-tree edge's endpoints at their lowest
/// common ancestor: u -> ... -> lca -> ... -> v, closed by the edge (v, u)
fn fundamental_cycle<V: VertexLabel>(parent: &HashMap<V, V>, u: &V, v: &V) -> Vec<V> {
    let mut u_branch: Vec<V> = vec![u.clone()];
    let mut current = u;
    while let Some(p) = parent.get(current) {
        u_branch.push(p.clone());
        current = p;
    }
    let u_ancestors: HashSet<&V> = u_branch.iter().collect();

    // Walk v's branch upward until it meets an ancestor of u
    let mut v_branch: Vec<V> = Vec::new();
    let mut current = v;
    while !u_ancestors.contains(current) {
        v_branch.push(current.clone());
        match parent.get(current) {
            Some(p) => current = p,
            None => break,
        }
    }
    let lca = current.clone();

    let mut cycle: Vec<V> = u_branch.into_iter().take_while(|a| *a != lca).collect();
    cycle.push(lca);
    cycle.extend(v_branch.into_iter().rev());
    cycle
}

/// Enumerate every simple cycle, anchored at its smallest vertex so each
/// one is reported exactly once
fn simple_cycles<V: VertexLabel>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let mut cycles: Vec<Vec<V>> = Vec::new();

    for root in graph.vertices() {
        let mut path: Vec<V> = vec![root.clone()];
        let mut on_path: HashSet<V> = HashSet::new();
        on_path.insert(root.clone());
        extend_cycles(graph, &root, &mut path, &mut on_path, &mut cycles);
    }

    cycles
}

/// Depth-first extension of the current path. Only vertices ordered after
/// the root are eligible, which anchors every cycle at its smallest vertex.
fn extend_cycles<V: VertexLabel>(
    graph: &Graph<V>,
    root: &V,
    path: &mut Vec<V>,
    on_path: &mut HashSet<V>,
    cycles: &mut Vec<Vec<V>>,
) {
    let Some(current) = path.last().cloned() else {
        return;
    };
    let Ok(neighbors) = graph.neighbors(&current) else {
        return;
    };

    for neighbor in neighbors {
        if neighbor == *root && path.len() > 1 {
            cycles.push(path.clone());
        } else if neighbor > *root && !on_path.contains(&neighbor) {
            path.push(neighbor.clone());
            on_path.insert(neighbor.clone());
            extend_cycles(graph, root, path, on_path, cycles);
            on_path.remove(&neighbor);
            path.pop();
        }
    }
}

//! Integration tests over the public graph surface
//!
//! Exercises the container and every algorithm together, including a
//! brute-force cross-check of Dijkstra against exhaustive simple-path
//! enumeration on the coursework fixtures.

use graf::error::GraphError;
use graf::graph::{
    bfs_traverse, dfs_traverse, dijkstra_traverse, find_cycles, is_connected, shortest_path, Graph,
};
use std::collections::HashSet;

fn coursework_graph() -> Graph<char> {
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

/// Every simple path between two vertices, with its total weight
fn all_simple_paths(graph: &Graph<char>, from: char, to: char) -> Vec<(Vec<char>, f64)> {
    fn extend(
        graph: &Graph<char>,
        to: char,
        path: &mut Vec<char>,
        seen: &mut HashSet<char>,
        cost: f64,
        results: &mut Vec<(Vec<char>, f64)>,
    ) {
        let current = *path.last().unwrap();
        if current == to {
            results.push((path.clone(), cost));
            return;
        }
        for (neighbor, weight) in graph.edges_from(&current).unwrap() {
            if seen.insert(neighbor) {
                path.push(neighbor);
                extend(graph, to, path, seen, cost + weight, results);
                path.pop();
                seen.remove(&neighbor);
            }
        }
    }

    let mut results = Vec::new();
    let mut seen = HashSet::new();
    seen.insert(from);
    extend(graph, to, &mut vec![from], &mut seen, 0.0, &mut results);
    results
}

#[test]
fn dijkstra_matches_brute_force_enumeration() {
    let graph = coursework_graph();
    let result = dijkstra_traverse(&graph, &'A').unwrap();

    for target in ['B', 'C', 'D', 'E', 'F', 'G'] {
        let paths = all_simple_paths(&graph, 'A', target);
        let brute_min = paths
            .iter()
            .map(|(_, cost)| *cost)
            .fold(f64::INFINITY, f64::min);

        let reported = result.distance_to(&target).unwrap();
        assert!(
            (reported - brute_min).abs() < 1e-9,
            "distance to {target} was {reported}, brute force found {brute_min}"
        );

        let point_to_point = shortest_path(&graph, &'A', &target).unwrap();
        assert!(point_to_point.found);
        assert!((point_to_point.distance - brute_min).abs() < 1e-9);
    }
}

#[test]
fn dijkstra_reports_the_expected_coursework_answer() {
    let graph = coursework_graph();
    let result = dijkstra_traverse(&graph, &'A').unwrap();

    // G costs 8 via A-B-D-G; the A-C-F-G route totals 9
    assert_eq!(result.distance_to(&'G'), Some(8.0));
    assert_eq!(result.path_to(&'G'), Some(&['A', 'B', 'D', 'G'][..]));

    let alternative: f64 = [5.0, 3.0, 1.0].iter().sum();
    assert!(alternative > 8.0);
}

#[test]
fn traversals_cover_the_component_exactly_once() {
    let mut graph = coursework_graph();
    graph.add_edge('X', 'Y');

    let bfs = bfs_traverse(&graph, &'A').unwrap();
    let dfs = dfs_traverse(&graph, &'A').unwrap();

    assert_eq!(bfs[0], 'A');
    assert_eq!(dfs[0], 'A');

    let bfs_set: HashSet<char> = bfs.iter().copied().collect();
    let dfs_set: HashSet<char> = dfs.iter().copied().collect();
    assert_eq!(bfs_set, dfs_set);
    assert_eq!(bfs.len(), bfs_set.len());
    assert_eq!(dfs.len(), dfs_set.len());
    assert!(!bfs_set.contains(&'X'));
}

#[test]
fn connectivity_flips_when_the_isolated_vertex_is_linked() {
    let mut graph = coursework_graph();
    assert!(is_connected(&graph));

    graph.add_vertex('Z');
    assert!(!is_connected(&graph));

    graph.add_edge('G', 'Z');
    assert!(is_connected(&graph));
}

#[test]
fn one_extra_edge_creates_exactly_one_cycle() {
    let mut tree = Graph::from_edges(&[('a', 'b'), ('a', 'c'), ('c', 'd'), ('c', 'e')], false);
    assert!(find_cycles(&tree).is_empty());

    tree.add_edge('b', 'e');
    assert_eq!(find_cycles(&tree).len(), 1);
}

#[test]
fn absent_vertices_surface_as_vertex_not_found() {
    let graph = coursework_graph();

    assert!(matches!(
        bfs_traverse(&graph, &'?'),
        Err(GraphError::VertexNotFound { .. })
    ));
    assert!(matches!(
        graph.neighbors(&'?'),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn results_serialize_for_the_presentation_layer() {
    let graph = coursework_graph();

    let dijkstra = dijkstra_traverse(&graph, &'A').unwrap();
    let json = serde_json::to_value(&dijkstra).unwrap();
    assert_eq!(json["source"], serde_json::json!("A"));
    assert_eq!(json["distances"]["G"], serde_json::json!(8.0));

    let mut graph = graph;
    graph.add_vertex('Z');
    let missing = shortest_path(&graph, &'A', &'Z').unwrap();
    let json = serde_json::to_value(&missing).unwrap();
    assert_eq!(json["found"], serde_json::json!(false));
    assert_eq!(json["path_length"], serde_json::json!(0));
}

use pathtrace_lib::{EdgeRef, Error, Graph};

#[test]
fn add_edge_creates_both_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge("X", "Y", 3).expect("valid edge");

    assert!(graph.contains("X"));
    assert!(graph.contains("Y"));
    assert!(graph.neighbours("Y").is_empty());
}

#[test]
fn nodes_are_listed_in_sorted_order() {
    let graph = Graph::from_edges([("delta", "alpha", 1), ("charlie", "bravo", 1)]).unwrap();
    let nodes: Vec<_> = graph.nodes().collect();
    assert_eq!(nodes, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn unknown_node_has_no_neighbours() {
    let graph = Graph::example();
    assert!(graph.neighbours("Nowhere").is_empty());
    assert!(graph.neighbours("J").is_empty());
}

#[test]
fn parallel_edges_are_kept_in_insertion_order() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 7).unwrap();
    graph.add_edge("A", "B", 2).unwrap();

    let weights: Vec<_> = graph.neighbours("A").iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![7, 2]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn all_edges_groups_by_node_then_insertion() {
    let graph = Graph::example();
    let edges: Vec<EdgeRef<'_>> = graph.all_edges().collect();

    assert_eq!(edges.len(), 12);
    let first: Vec<_> = edges
        .iter()
        .take(3)
        .map(|edge| (edge.source, edge.target, edge.weight))
        .collect();
    assert_eq!(first, vec![("A", "B", 5), ("A", "D", 5), ("A", "E", 5)]);
    let e_targets: Vec<_> = edges
        .iter()
        .filter(|edge| edge.source == "E")
        .map(|edge| edge.target)
        .collect();
    assert_eq!(e_targets, vec!["F", "G"]);
}

#[test]
fn negative_weight_is_invalid_input() {
    let err = Graph::from_edges([("A", "B", 1), ("B", "C", -4)]).unwrap_err();
    match err {
        Error::InvalidInput { from, to, weight } => {
            assert_eq!((from.as_str(), to.as_str(), weight), ("B", "C", -4));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn graph_serialises_as_adjacency_map() {
    let graph = Graph::from_edges([("A", "B", 2)]).unwrap();
    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json["adjacency"]["A"][0]["target"], "B");
    assert_eq!(json["adjacency"]["B"], serde_json::json!([]));
}

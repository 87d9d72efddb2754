//! Shared helpers for pathtrace-lib integration tests.

use std::path::PathBuf;

use pathtrace_lib::{Graph, Weight};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Canonical example plus an isolated node `Z`.
#[allow(dead_code)]
pub fn example_with_isolated() -> Graph {
    let mut graph = Graph::example();
    graph.add_node("Z");
    graph
}

/// Sum of the cheapest edge weights along consecutive pairs of `path`.
#[allow(dead_code)]
pub fn path_weight(graph: &Graph, path: &[String]) -> Option<Weight> {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours(&pair[0])
                .iter()
                .filter(|edge| edge.target == pair[1])
                .map(|edge| edge.weight)
                .min()
        })
        .sum()
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Label identifying a node in the graph.
pub type NodeId = String;

/// Non-negative edge weight.
pub type Weight = u64;

/// Edges of the canonical sample topology, in insertion order.
const EXAMPLE_EDGES: [(&str, &str, Weight); 12] = [
    ("A", "B", 5),
    ("A", "D", 5),
    ("A", "E", 5),
    ("B", "C", 6),
    ("C", "F", 5),
    ("D", "F", 6),
    ("E", "F", 8),
    ("E", "G", 4),
    ("F", "I", 9),
    ("F", "H", 6),
    ("G", "H", 2),
    ("H", "J", 3),
];

/// Outgoing edge stored in a node's adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

/// Borrowed `(source, target, weight)` view returned by [`Graph::all_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRef<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: Weight,
}

/// Directed, weighted adjacency structure consumed by the search engine.
///
/// Nodes are kept sorted by label so listings and traces are stable. Each
/// node's outgoing edges keep insertion order, and parallel edges are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed sample graph used for demonstrations and tests.
    pub fn example() -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in EXAMPLE_EDGES {
            graph.push_edge(from, to, weight);
        }
        graph
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, i64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Ensure `id` exists. Calling this for a known node is a no-op.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Append a directed edge, creating both endpoints when missing.
    ///
    /// Negative weights are rejected before the graph is touched.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        let weight = Weight::try_from(weight).map_err(|_| Error::InvalidInput {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })?;
        self.push_edge(from, to, weight);
        Ok(())
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: Weight) {
        self.add_node(from);
        self.add_node(to);
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge {
                target: to.to_string(),
                weight,
            });
        }
    }

    /// All node labels in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Whether `id` is a known node.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Outgoing edges of `id`; unknown nodes have none.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge, grouped by source node, in insertion order within a node.
    pub fn all_edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.adjacency.iter().flat_map(|(source, edges)| {
            edges.iter().map(move |edge| EdgeRef {
                source: source.as_str(),
                target: edge.target.as_str(),
                weight: edge.weight,
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_node("A");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.neighbours("A").len(), 1);
    }

    #[test]
    fn negative_weight_leaves_graph_untouched() {
        let mut graph = Graph::new();
        let err = graph.add_edge("A", "B", -3).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { weight: -3, .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn example_graph_has_ten_nodes() {
        let graph = Graph::example();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), EXAMPLE_EDGES.len());
    }
}

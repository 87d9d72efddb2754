//! Query front end over the search engine.
//!
//! This module provides:
//! - [`NodePolicy`] - How labels missing from the graph are handled
//! - [`PathFinder`] - Graph-bound finder applying a policy before searching
//! - [`RouteRequest`] - High-level query (single goal or every destination)
//! - [`RoutePlan`] - Result of a request
//! - [`plan_route`] - Main entry point used by front ends
//!
//! # Example
//!
//! ```
//! use pathtrace_lib::{plan_route, Graph, RouteRequest};
//!
//! let graph = Graph::example();
//! let plan = plan_route(&graph, &RouteRequest::to("A", "J")).unwrap();
//! assert_eq!(plan.results().count(), 1);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{all_shortest_paths, shortest_path, SearchResult};

/// Maximum number of "did you mean" suggestions attached to an error.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a label to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Handling of start/goal labels that are not nodes of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodePolicy {
    /// Treat unknown labels as nodes with no outgoing edges.
    #[default]
    Permissive,
    /// Reject unknown labels with [`Error::UnknownNode`].
    Strict,
}

/// Search front end bound to one graph.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
    policy: NodePolicy,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            policy: NodePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: NodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shortest path from `start` to `goal` after applying the node policy.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Result<SearchResult> {
        self.check_node(start)?;
        self.check_node(goal)?;
        Ok(shortest_path(self.graph, start, goal))
    }

    /// One result per destination other than `start`.
    pub fn all_shortest_paths(&self, start: &str) -> Result<BTreeMap<NodeId, SearchResult>> {
        self.check_node(start)?;
        Ok(all_shortest_paths(self.graph, start))
    }

    fn check_node(&self, name: &str) -> Result<()> {
        if self.graph.contains(name) {
            return Ok(());
        }
        match self.policy {
            NodePolicy::Permissive => {
                warn!(
                    node = name,
                    "node is not part of the graph; treating it as isolated"
                );
                Ok(())
            }
            NodePolicy::Strict => Err(Error::UnknownNode {
                name: name.to_string(),
                suggestions: suggest_nodes(self.graph, name, MAX_SUGGESTIONS),
            }),
        }
    }
}

/// Labels similar to `name`, best match first.
pub fn suggest_nodes(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .map(|node| (strsim::jaro_winkler(&needle, &node.to_lowercase()), node))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, node)| node.to_string())
        .collect()
}

/// High-level query request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    /// Destination, or `None` to search every other node.
    pub goal: Option<String>,
    pub policy: NodePolicy,
}

impl RouteRequest {
    /// Single-destination request with the default policy.
    pub fn to(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: Some(goal.into()),
            policy: NodePolicy::default(),
        }
    }

    /// Every-destination request with the default policy.
    pub fn from_start(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: None,
            policy: NodePolicy::default(),
        }
    }

    pub fn strict(mut self) -> Self {
        self.policy = NodePolicy::Strict;
        self
    }
}

/// Planned result returned by [`plan_route`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePlan {
    Single { result: SearchResult },
    All {
        start: NodeId,
        results: BTreeMap<NodeId, SearchResult>,
    },
}

impl RoutePlan {
    /// Results in destination order.
    pub fn results(&self) -> Box<dyn Iterator<Item = &SearchResult> + '_> {
        match self {
            RoutePlan::Single { result } => Box::new(std::iter::once(result)),
            RoutePlan::All { results, .. } => Box::new(results.values()),
        }
    }
}

/// Compute the search(es) described by `request`.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let finder = PathFinder::new(graph).with_policy(request.policy);
    match request.goal.as_deref() {
        Some(goal) => Ok(RoutePlan::Single {
            result: finder.shortest_path(&request.start, goal)?,
        }),
        None => Ok(RoutePlan::All {
            start: request.start.clone(),
            results: finder.all_shortest_paths(&request.start)?,
        }),
    }
}

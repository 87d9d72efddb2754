use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::distance::Distance;
use crate::graph::{Graph, NodeId, Weight};
use crate::trace::TraceStep;

/// Outcome of a single shortest-path query.
///
/// The engine keeps no reference to the result once it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub start: NodeId,
    pub goal: NodeId,
    /// Best known distance per node. Nodes that were never reached, or that
    /// were still queued when the goal settled, may hold non-final values.
    pub distances: BTreeMap<NodeId, Distance>,
    pub predecessors: BTreeMap<NodeId, Option<NodeId>>,
    /// Nodes from `start` to `goal`, empty when the goal is unreachable.
    pub path: Vec<NodeId>,
    pub total_distance: Distance,
    pub steps: Vec<TraceStep>,
}

impl SearchResult {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Recorded distance for `node`, `Unreachable` when unknown.
    pub fn distance_to(&self, node: &str) -> Distance {
        self.distances.get(node).copied().unwrap_or_default()
    }

    /// Trace rendered one line per step.
    pub fn trace_lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    /// Trace joined with newlines, ready for display.
    pub fn trace_text(&self) -> String {
        self.trace_lines().join("\n")
    }
}

/// Run Dijkstra's algorithm from `start`, stopping as soon as `goal` settles.
///
/// Labels missing from the graph are treated as nodes without outgoing
/// edges: an unknown `start` is still seeded at distance zero.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    debug!(
        start,
        goal,
        nodes = graph.node_count(),
        "starting shortest path search"
    );

    let mut distances: BTreeMap<&str, Distance> = graph
        .nodes()
        .map(|node| (node, Distance::Unreachable))
        .collect();
    let mut predecessors: BTreeMap<&str, Option<&str>> =
        graph.nodes().map(|node| (node, None)).collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut steps = Vec::new();

    distances.insert(start, Distance::ZERO);
    predecessors.entry(start).or_insert(None);

    steps.push(TraceStep::Start {
        node: start.to_string(),
    });
    steps.push(TraceStep::InitialDistances {
        distances: distances
            .iter()
            .map(|(node, distance)| (node.to_string(), *distance))
            .collect(),
    });

    frontier.push(QueueEntry::new(start, 0));
    let mut step = 1;

    while let Some(entry) = frontier.pop() {
        if visited.contains(entry.node) {
            continue;
        }
        let settled = Distance::Finite(entry.cost);
        if settled > distances.get(entry.node).copied().unwrap_or_default() {
            continue;
        }

        visited.insert(entry.node);
        trace!(node = entry.node, cost = entry.cost, "settled node");
        steps.push(TraceStep::Visit {
            step,
            node: entry.node.to_string(),
            distance: settled,
        });

        if entry.node == goal {
            steps.push(TraceStep::GoalReached {
                node: entry.node.to_string(),
            });
            break;
        }

        let edges = graph.neighbours(entry.node);
        steps.push(TraceStep::Neighbours {
            node: entry.node.to_string(),
            edges: edges
                .iter()
                .map(|edge| (edge.target.clone(), edge.weight))
                .collect(),
        });

        for edge in edges {
            let next = edge.target.as_str();
            if visited.contains(next) {
                continue;
            }

            let current = distances.get(next).copied().unwrap_or_default();
            let candidate = settled.extend(edge.weight);
            if candidate < current {
                steps.push(TraceStep::Relaxed {
                    node: next.to_string(),
                    old: current,
                    new: candidate,
                    via: entry.node.to_string(),
                });
                distances.insert(next, candidate);
                predecessors.insert(next, Some(entry.node));
                if let Some(cost) = candidate.finite() {
                    frontier.push(QueueEntry::new(next, cost));
                }
            } else {
                steps.push(TraceStep::NotRelaxed {
                    node: next.to_string(),
                    current,
                    candidate,
                });
            }
        }

        step += 1;
    }

    let path = reconstruct_path(&predecessors, start, goal);
    let total_distance = if path.is_empty() {
        Distance::Unreachable
    } else {
        distances.get(goal).copied().unwrap_or_default()
    };

    if path.is_empty() {
        steps.push(TraceStep::NoPath {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    } else {
        steps.push(TraceStep::Summary {
            path: path.clone(),
            total: total_distance,
        });
    }

    debug!(
        start,
        goal,
        settled = visited.len(),
        total = %total_distance,
        "finished shortest path search"
    );

    SearchResult {
        start: start.to_string(),
        goal: goal.to_string(),
        distances: distances
            .into_iter()
            .map(|(node, distance)| (node.to_string(), distance))
            .collect(),
        predecessors: predecessors
            .into_iter()
            .map(|(node, parent)| (node.to_string(), parent.map(str::to_string)))
            .collect(),
        path,
        total_distance,
        steps,
    }
}

/// Run one independent search per destination other than `start`.
///
/// Each entry is exactly what [`shortest_path`] returns for that pair, so
/// every destination keeps its own trace.
pub fn all_shortest_paths(graph: &Graph, start: &str) -> BTreeMap<NodeId, SearchResult> {
    graph
        .nodes()
        .filter(|&destination| destination != start)
        .map(|destination| {
            let result = shortest_path(graph, start, destination);
            (destination.to_string(), result)
        })
        .collect()
}

fn reconstruct_path(
    predecessors: &BTreeMap<&str, Option<&str>>,
    start: &str,
    goal: &str,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = predecessors.get(node).copied().flatten();
    }
    path.reverse();

    if path.first().map(String::as_str) == Some(start) {
        path
    } else {
        Vec::new()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: Weight,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: Weight) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in ascending label order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lowest_cost_then_lowest_label() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new("E", 5));
        heap.push(QueueEntry::new("B", 5));
        heap.push(QueueEntry::new("G", 2));
        heap.push(QueueEntry::new("D", 5));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["G", "B", "D", "E"]);
    }

    #[test]
    fn reconstruct_discards_partial_chain() {
        let predecessors = BTreeMap::from([("A", None), ("B", Some("C")), ("C", None)]);
        assert!(reconstruct_path(&predecessors, "A", "B").is_empty());
    }

    #[test]
    fn start_equals_goal_is_single_node() {
        let graph = Graph::example();
        let result = shortest_path(&graph, "D", "D");

        assert_eq!(result.path, vec!["D".to_string()]);
        assert_eq!(result.total_distance, Distance::ZERO);
        assert!(matches!(
            result.steps.last(),
            Some(TraceStep::Summary { .. })
        ));
    }

    #[test]
    fn parallel_edges_take_the_cheaper_one() {
        let graph = Graph::from_edges([("A", "B", 9), ("A", "B", 2)]).unwrap();
        let result = shortest_path(&graph, "A", "B");

        assert_eq!(result.total_distance, Distance::Finite(2));
        let not_relaxed = result
            .steps
            .iter()
            .filter(|step| matches!(step, TraceStep::NotRelaxed { .. }))
            .count();
        assert_eq!(not_relaxed, 0, "second edge improves on the first");
    }
}

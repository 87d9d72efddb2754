//! Execution trace produced by a search.
//!
//! Each [`TraceStep`] is one decision the engine made, kept as data so
//! callers can inspect it, serialise it, or render it line by line.

use std::fmt;

use serde::Serialize;

use crate::distance::Distance;
use crate::graph::{NodeId, Weight};

/// A single entry in the execution trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceStep {
    /// The search was seeded at `node`.
    Start { node: NodeId },
    /// Distance table right after initialisation, in node order.
    InitialDistances { distances: Vec<(NodeId, Distance)> },
    /// A new step began by settling `node` at `distance`.
    Visit {
        step: usize,
        node: NodeId,
        distance: Distance,
    },
    /// The settled node was the goal and the loop stopped.
    GoalReached { node: NodeId },
    /// Outgoing edges of the settled node, in insertion order.
    Neighbours {
        node: NodeId,
        edges: Vec<(NodeId, Weight)>,
    },
    /// A shorter tentative distance was recorded for `node`.
    Relaxed {
        node: NodeId,
        old: Distance,
        new: Distance,
        via: NodeId,
    },
    /// The candidate distance did not improve on the recorded one.
    NotRelaxed {
        node: NodeId,
        current: Distance,
        candidate: Distance,
    },
    /// Final path and its total weight.
    Summary { path: Vec<NodeId>, total: Distance },
    /// The goal was never reached.
    NoPath { start: NodeId, goal: NodeId },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Start { node } => write!(f, "Starting from node: {node}"),
            TraceStep::InitialDistances { distances } => {
                let joined = distances
                    .iter()
                    .map(|(node, distance)| format!("{node}={distance}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Initial distances: {{{joined}}}")
            }
            TraceStep::Visit {
                step,
                node,
                distance,
            } => write!(
                f,
                "--- Step {step} --- visiting node: {node} (current distance: {distance})"
            ),
            TraceStep::GoalReached { node } => write!(f, "Reached goal node {node}"),
            TraceStep::Neighbours { node, edges } => {
                let joined = edges
                    .iter()
                    .map(|(target, weight)| format!("{target}({weight})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Neighbours of {node}: [{joined}]")
            }
            TraceStep::Relaxed {
                node,
                old,
                new,
                via,
            } => write!(f, "  -> updating {node}: {old} -> {new} (via {via})"),
            TraceStep::NotRelaxed {
                node,
                current,
                candidate,
            } => write!(f, "  -> {node}: not updated ({current} <= {candidate})"),
            TraceStep::Summary { path, total } => write!(
                f,
                "Shortest path: {} (total distance: {total})",
                path.join(" -> ")
            ),
            TraceStep::NoPath { start, goal } => {
                write!(f, "No path exists between {start} and {goal}")
            }
        }
    }
}

//! pathtrace library entry points.
//!
//! This crate builds small weighted directed graphs and runs Dijkstra's
//! algorithm over them, returning the shortest path together with a
//! step-by-step trace of the search. Front ends (the CLI, or any other
//! presentation layer) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod distance;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod path;
pub mod routing;
pub mod trace;

pub use distance::Distance;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeRef, Graph, NodeId, Weight};
pub use loader::{load_graph, read_graph, GraphFormat};
pub use output::{PathStep, RenderMode, ResultSummary};
pub use path::{all_shortest_paths, shortest_path, SearchResult};
pub use routing::{plan_route, suggest_nodes, NodePolicy, PathFinder, RoutePlan, RouteRequest};
pub use trace::TraceStep;

// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// resolves the graph and dispatches to these handlers.

pub mod graph;
pub mod route;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pathtrace_lib::{load_graph, Graph};

/// Load the graph from `path`, or fall back to the built-in example.
pub fn resolve_graph(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(path) => load_graph(path)
            .with_context(|| format!("failed to load graph from {}", path.display())),
        None => {
            debug!("no graph file given; using the built-in example graph");
            Ok(Graph::example())
        }
    }
}

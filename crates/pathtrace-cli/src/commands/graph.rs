//! Graph command handler listing nodes and edges.

use anyhow::Result;
use tracing::debug;

use pathtrace_lib::Graph;

use crate::output::{render_graph, OutputFormat};

/// Handle the graph subcommand and return the rendered output.
pub fn handle_graph_command(graph: &Graph, format: OutputFormat) -> Result<String> {
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "listing graph"
    );
    render_graph(graph, format)
}

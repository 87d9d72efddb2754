//! Route command handler for computing a shortest path between two nodes.

use anyhow::Result;

use pathtrace_lib::{Error as QueryError, Graph, NodePolicy, PathFinder};

use crate::output::{render_result, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node label.
    pub from: String,
    /// Destination node label.
    pub to: String,
    /// Reject labels that are not nodes of the graph.
    pub strict: bool,
    /// Include the step-by-step execution trace.
    pub show_trace: bool,
}

pub(crate) fn policy_for(strict: bool) -> NodePolicy {
    if strict {
        NodePolicy::Strict
    } else {
        NodePolicy::Permissive
    }
}

/// Handle the route subcommand and return the rendered output.
pub fn handle_route_command(
    graph: &Graph,
    format: OutputFormat,
    palette: ColorPalette,
    args: &RouteCommandArgs,
) -> Result<String> {
    let result = PathFinder::new(graph)
        .with_policy(policy_for(args.strict))
        .shortest_path(&args.from, &args.to)
        .map_err(handle_query_failure)?;
    render_result(&result, format, args.show_trace, palette)
}

/// Turn library query errors into messages suited for a terminal.
pub(crate) fn handle_query_failure(err: QueryError) -> anyhow::Error {
    match err {
        QueryError::UnknownNode { name, suggestions } => {
            anyhow::anyhow!(format_unknown_node_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_node_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown node '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

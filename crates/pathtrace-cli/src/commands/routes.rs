//! Routes command handler listing the shortest path to every other node.

use anyhow::Result;

use pathtrace_lib::{Graph, PathFinder};

use crate::commands::route::{handle_query_failure, policy_for};
use crate::output::{render_all, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the routes command.
#[derive(Debug, Clone)]
pub struct RoutesCommandArgs {
    pub from: String,
    pub strict: bool,
    pub show_trace: bool,
}

/// Handle the routes subcommand and return the rendered output.
pub fn handle_routes_command(
    graph: &Graph,
    format: OutputFormat,
    palette: ColorPalette,
    args: &RoutesCommandArgs,
) -> Result<String> {
    let results = PathFinder::new(graph)
        .with_policy(policy_for(args.strict))
        .all_shortest_paths(&args.from)
        .map_err(handle_query_failure)?;
    render_all(&args.from, &results, format, args.show_trace, palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_destination() {
        let args = RoutesCommandArgs {
            from: "A".to_string(),
            strict: false,
            show_trace: false,
        };
        let text = handle_routes_command(
            &Graph::example(),
            OutputFormat::Text,
            ColorPalette::plain(),
            &args,
        )
        .unwrap();

        assert!(text.starts_with("Routes from A:\n"));
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("  A -> C: 11 via A -> B -> C\n"));
    }

    #[test]
    fn strict_unknown_start_is_rejected() {
        let args = RoutesCommandArgs {
            from: "a".to_string(),
            strict: true,
            show_trace: false,
        };
        let err = handle_routes_command(
            &Graph::example(),
            OutputFormat::Text,
            ColorPalette::plain(),
            &args,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown node 'a'. Did you mean 'A'?");
    }
}

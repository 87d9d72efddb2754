use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathtrace_cli::commands::graph::handle_graph_command;
use pathtrace_cli::commands::resolve_graph;
use pathtrace_cli::commands::route::{handle_route_command, RouteCommandArgs};
use pathtrace_cli::commands::routes::{handle_routes_command, RoutesCommandArgs};
use pathtrace_cli::output::OutputFormat;
use pathtrace_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Traced shortest-path queries over weighted graphs"
)]
struct Cli {
    /// Graph file (.csv or .json). Defaults to the built-in example graph.
    #[arg(long, global = true, env = "PATHTRACE_GRAPH")]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject start/goal labels that are not nodes of the graph.
    #[arg(long, global = true)]
    strict: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest path between two nodes.
    Route {
        /// Starting node label.
        #[arg(long = "from")]
        from: String,
        /// Destination node label.
        #[arg(long = "to")]
        to: String,
        /// Omit the step-by-step execution trace.
        #[arg(long)]
        no_trace: bool,
    },
    /// Compute the shortest path from one node to every other node.
    Routes {
        /// Starting node label.
        #[arg(long = "from")]
        from: String,
        /// Include the execution trace of every search.
        #[arg(long)]
        trace: bool,
    },
    /// List the nodes and edges of the graph.
    Graph,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = resolve_graph(cli.graph.as_deref())?;
    let palette = if cli.no_color || cli.format != OutputFormat::Text {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    let output = match cli.command {
        Command::Route { from, to, no_trace } => handle_route_command(
            &graph,
            cli.format,
            palette,
            &RouteCommandArgs {
                from,
                to,
                strict: cli.strict,
                show_trace: !no_trace,
            },
        )?,
        Command::Routes { from, trace } => handle_routes_command(
            &graph,
            cli.format,
            palette,
            &RoutesCommandArgs {
                from,
                strict: cli.strict,
                show_trace: trace,
            },
        )?,
        Command::Graph => handle_graph_command(&graph, cli.format)?,
    };

    print!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

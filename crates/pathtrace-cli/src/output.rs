//! Output formatting for search results.
//!
//! Every renderer returns a `String` so callers decide where it goes and
//! tests can assert on it directly.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use pathtrace_lib::{
    Distance, EdgeRef, Graph, NodeId, RenderMode, ResultSummary, SearchResult, TraceStep,
};

use crate::terminal::ColorPalette;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: ResultSummary,
    distances: &'a BTreeMap<NodeId, Distance>,
    predecessors: &'a BTreeMap<NodeId, Option<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraceStep]>,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a SearchResult, show_trace: bool) -> Self {
        Self {
            summary: ResultSummary::from_result(result),
            distances: &result.distances,
            predecessors: &result.predecessors,
            trace: show_trace.then_some(result.steps.as_slice()),
        }
    }
}

/// Render a single search result.
pub fn render_result(
    result: &SearchResult,
    format: OutputFormat,
    show_trace: bool,
    palette: ColorPalette,
) -> Result<String> {
    let summary = ResultSummary::from_result(result);
    let rendered = match format {
        OutputFormat::Text => {
            let mut buffer = summary.render(RenderMode::PlainText);
            if show_trace {
                buffer.push_str("\nTrace:\n");
                buffer.push_str(&render_trace(&result.steps, palette));
            }
            buffer
        }
        OutputFormat::Rich => {
            let mut buffer = summary.render(RenderMode::RichText);
            if show_trace {
                buffer.push_str("\n```text\n");
                buffer.push_str(&render_trace(&result.steps, ColorPalette::plain()));
                buffer.push_str("```\n");
            }
            buffer
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonReport::new(result, show_trace))?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Render every destination reached from one start node.
pub fn render_all(
    start: &str,
    results: &BTreeMap<NodeId, SearchResult>,
    format: OutputFormat,
    show_trace: bool,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        let reports: BTreeMap<&str, JsonReport<'_>> = results
            .iter()
            .map(|(goal, result)| (goal.as_str(), JsonReport::new(result, show_trace)))
            .collect();
        let mut json = serde_json::to_string_pretty(&reports)?;
        json.push('\n');
        return Ok(json);
    }

    let rich = format == OutputFormat::Rich;
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Routes from {start}:");
    for (goal, result) in results {
        let line = if result.is_reachable() {
            format!(
                "{start} -> {goal}: {} via {}",
                result.total_distance,
                result.path.join(" -> ")
            )
        } else {
            format!("{start} -> {goal}: unreachable")
        };
        if rich {
            let _ = writeln!(buffer, "* {line}");
        } else {
            let _ = writeln!(buffer, "  {line}");
        }
    }

    if show_trace {
        for (goal, result) in results {
            let _ = writeln!(buffer, "\nTrace for {start} -> {goal}:");
            let trace_palette = if rich { ColorPalette::plain() } else { palette };
            buffer.push_str(&render_trace(&result.steps, trace_palette));
        }
    }
    Ok(buffer)
}

/// Render trace steps one per line, highlighting by step kind.
pub fn render_trace(steps: &[TraceStep], palette: ColorPalette) -> String {
    let mut buffer = String::new();
    for step in steps {
        let color = match step {
            TraceStep::Visit { .. } | TraceStep::GoalReached { .. } => palette.white_bold,
            TraceStep::Relaxed { .. } => palette.green,
            TraceStep::NotRelaxed { .. } | TraceStep::Neighbours { .. } => palette.gray,
            TraceStep::Summary { .. } => palette.cyan,
            TraceStep::NoPath { .. } => palette.red,
            TraceStep::Start { .. } | TraceStep::InitialDistances { .. } => "",
        };
        let _ = writeln!(buffer, "{}", palette.paint(color, &step.to_string()));
    }
    buffer
}

#[derive(Debug, Serialize)]
struct GraphListing<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<EdgeRef<'a>>,
}

/// Render the node and edge lists of a graph.
pub fn render_graph(graph: &Graph, format: OutputFormat) -> Result<String> {
    let listing = GraphListing {
        nodes: graph.nodes().collect(),
        edges: graph.all_edges().collect(),
    };

    let mut buffer = String::new();
    match format {
        OutputFormat::Json => {
            buffer = serde_json::to_string_pretty(&listing)?;
            buffer.push('\n');
        }
        OutputFormat::Text => {
            let _ = writeln!(
                buffer,
                "Nodes ({}): {}",
                listing.nodes.len(),
                listing.nodes.join(", ")
            );
            let _ = writeln!(buffer, "Edges ({}):", listing.edges.len());
            for edge in &listing.edges {
                let _ = writeln!(
                    buffer,
                    "  {} -> {} ({})",
                    edge.source, edge.target, edge.weight
                );
            }
        }
        OutputFormat::Rich => {
            let _ = writeln!(buffer, "**Nodes**: {}", listing.nodes.join(", "));
            let _ = writeln!(buffer, "**Edges**:");
            for edge in &listing.edges {
                let _ = writeln!(
                    buffer,
                    "* `{}` → `{}` ({})",
                    edge.source, edge.target, edge.weight
                );
            }
        }
    }
    Ok(buffer)
}

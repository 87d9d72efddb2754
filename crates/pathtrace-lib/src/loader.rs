//! Graph loading from edge-list files.
//!
//! Two formats are understood, selected by file extension:
//!
//! - CSV with a `from,to,weight` header (`source`/`target`/`cost` accepted).
//!   A row with an empty `to` declares an isolated node.
//! - JSON shaped as `{ "nodes": [...], "edges": [{ "from", "to", "weight" }] }`
//!   where `nodes` is optional.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// On-disk graph encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Csv,
    Json,
}

impl GraphFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(GraphFormat::Csv),
            Some("json") => Ok(GraphFormat::Json),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a graph from `path`, picking the format from its extension.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let format = GraphFormat::from_path(path)?;
    let file = fs::File::open(path)?;
    let graph = read_graph(file, format)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Parse a graph from any reader in the given format.
pub fn read_graph<R: Read>(reader: R, format: GraphFormat) -> Result<Graph> {
    match format {
        GraphFormat::Csv => read_csv(reader),
        GraphFormat::Json => read_json(reader),
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Graph> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::GraphParse {
            message: format!("failed to read CSV headers: {err}"),
        })?
        .clone();

    let normalized: Vec<String> = headers.iter().map(|h| h.to_ascii_lowercase()).collect();
    let synonyms: [(&str, &[&str]); 3] = [
        ("from", &["from", "source", "origin"]),
        ("to", &["to", "target", "destination"]),
        ("weight", &["weight", "cost", "distance"]),
    ];
    let columns: Vec<Option<usize>> = synonyms
        .iter()
        .map(|(_, alts)| normalized.iter().position(|h| alts.contains(&h.as_str())))
        .collect();

    let [Some(from_col), Some(to_col), Some(weight_col)] = columns[..] else {
        let missing: Vec<&str> = synonyms
            .iter()
            .zip(&columns)
            .filter(|(_, column)| column.is_none())
            .map(|((canon, _), _)| *canon)
            .collect();
        return Err(Error::GraphParse {
            message: format!(
                "CSV missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    };

    let mut graph = Graph::new();
    for (offset, record) in csv_reader.records().enumerate() {
        // Header is line 1.
        let row = offset + 2;
        let record = record?;
        let from = record.get(from_col).unwrap_or("");
        if from.is_empty() {
            return Err(Error::GraphParse {
                message: format!("missing 'from' at row {row}"),
            });
        }

        let to = record.get(to_col).unwrap_or("");
        if to.is_empty() {
            graph.add_node(from);
            continue;
        }

        let weight = record
            .get(weight_col)
            .unwrap_or("")
            .parse::<i64>()
            .map_err(|err| Error::GraphParse {
                message: format!("invalid weight for edge {from} -> {to} at row {row}: {err}"),
            })?;
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(alias = "source")]
    from: String,
    #[serde(alias = "target")]
    to: String,
    weight: i64,
}

fn read_json<R: Read>(reader: R) -> Result<Graph> {
    let file: GraphFile = serde_json::from_reader(reader)?;
    let mut graph = Graph::new();
    for node in &file.nodes {
        graph.add_node(node);
    }
    for edge in &file.edges {
        graph.add_edge(&edge.from, &edge.to, edge.weight)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn csv_accepts_header_synonyms() {
        let csv = "Source, Target, Cost\nA, B, 4\nB, C, 1\n";
        let graph = read_graph(Cursor::new(csv), GraphFormat::Csv).expect("parses");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbours("A")[0].weight, 4);
    }

    #[test]
    fn csv_row_without_target_declares_node() {
        let csv = "from,to,weight\nA,B,1\nZ,,\n";
        let graph = read_graph(Cursor::new(csv), GraphFormat::Csv).expect("parses");
        assert!(graph.contains("Z"));
        assert!(graph.neighbours("Z").is_empty());
    }

    #[test]
    fn csv_bad_weight_names_row() {
        let csv = "from,to,weight\nA,B,1\nB,C,heavy\n";
        let err = read_graph(Cursor::new(csv), GraphFormat::Csv).unwrap_err();
        assert!(err.to_string().contains("row 3"), "{err}");
    }

    #[test]
    fn json_nodes_are_optional() {
        let json = r#"{ "edges": [ { "from": "A", "to": "B", "weight": 2 } ] }"#;
        let graph = read_graph(Cursor::new(json), GraphFormat::Json).expect("parses");
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = GraphFormat::from_path(Path::new("graph.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
        assert_eq!(
            GraphFormat::from_path(Path::new("graph.JSON")).unwrap(),
            GraphFormat::Json
        );
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the pathtrace library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge is added with a weight the engine cannot handle.
    #[error("invalid edge {from} -> {to}: weight {weight} must not be negative")]
    InvalidInput {
        from: String,
        to: String,
        weight: i64,
    },

    /// Raised by strict queries when a node label is not part of the graph.
    #[error("unknown node: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a graph file contains malformed rows or fields.
    #[error("failed to parse graph: {message}")]
    GraphParse { message: String },

    /// Raised when a graph file has an extension the loader does not handle.
    #[error("unsupported graph format for {path}; expected .csv or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the logistics library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a referenced node is not part of the graph.
    #[error("unknown node: {node}")]
    NodeNotFound { node: String },

    /// Raised when an edge lookup or update targets a missing connection.
    #[error("no connection between {origin} and {destination}")]
    EdgeNotFound { origin: String, destination: String },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    NoPath { start: String, goal: String },

    /// Raised when eccentricity is requested on a graph with unreachable pairs.
    #[error("graph is disconnected: {to} is unreachable from {from}")]
    DisconnectedGraph { from: String, to: String },

    /// Raised when a center is requested on a graph without nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Raised when a weight vector is rejected at the mutation boundary.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when an edge-list line cannot be parsed.
    #[error("invalid edge record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// Raised when a weather condition name or number is not recognised.
    #[error("unknown weather condition: {value} (expected normal, rain, snow, storm or 1-4)")]
    UnknownCondition { value: String },

    /// Edge-list file could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphFileNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn edge_not_found(origin: &str, destination: &str) -> Self {
        Error::EdgeNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}

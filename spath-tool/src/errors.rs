//! Errors.

use std::io;

use thiserror::Error;

/// Error type for graph loading and queries issued by the tool.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the graph file.
    #[error("Failed to read graph file [{path}]: {source}")]
    ConfigFileRead { path: String, source: io::Error },

    /// The graph file is not valid JSON or does not match the expected layout.
    #[error("Graph file parse error: {0}")]
    BadConfigFile(#[from] serde_json::Error),

    #[error("Vertex {0} is declared more than once")]
    DuplicateVertex(u32),

    #[error("Edge #{edge} refers to undeclared vertex {id}")]
    UnknownVertex { edge: usize, id: u32 },

    #[error("Edge #{edge} rejected: {source}")]
    BadEdge { edge: usize, source: spath_graph::Error },

    /// User supplied vertex position (1-based) outside of the graph.
    #[error("Vertex position {position} is out of range 1 to {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Bad vertex position [{0}]")]
    BadInput(String),

    #[error(transparent)]
    Graph(#[from] spath_graph::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

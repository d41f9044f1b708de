//! Graph file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use spath_graph::Graph;

use crate::errors::{Error, Result};

/// Graph description loaded from a JSON file:
///
/// ```json
/// { "vertices": [1, 2], "edges": [{ "from": 1, "to": 2, "weight": 7 }] }
/// ```
///
/// Edges refer to vertices by id. Vertex positions follow the order of `vertices`.
#[derive(Clone, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    pub vertices: Vec<u32>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Directed edge between two declared vertices.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: u32,
    pub to: u32,
    /// Signed so that negative weights reach the graph and get rejected there.
    pub weight: i64,
}

impl GraphFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading graph file [{}]", path.display());
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigFileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the in-memory graph.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        let mut handles = HashMap::with_capacity(self.vertices.len());
        for &id in &self.vertices {
            if handles.contains_key(&id) {
                return Err(Error::DuplicateVertex(id));
            }
            handles.insert(id, graph.create_vertex(id));
        }

        for (edge, spec) in self.edges.iter().enumerate() {
            let lookup = |id: u32| handles.get(&id).copied().ok_or(Error::UnknownVertex { edge, id });
            let (from, to) = (lookup(spec.from)?, lookup(spec.to)?);
            graph
                .add_edge(from, to, spec.weight)
                .map_err(|source| Error::BadEdge { edge, source })?;
        }

        debug!("Built graph with {} vertices and {} edges", graph.len(), self.edges.len());
        Ok(graph)
    }
}

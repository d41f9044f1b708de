//! Query with user supplied (1-based) vertex positions.

use std::fmt;

use spath_graph::{Error as GraphError, Graph, VertexId};
use spath_search::{PathDistance, ShortestPathEngine};

use crate::errors::{Error, Result};

/// Answer to a query, printable for the user.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct QueryReport {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: PathDistance,
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.distance {
            PathDistance::Distance(d) => write!(f, "The shortest distance from {} to {} is {}", self.from, self.to, d),
            PathDistance::Unreachable => write!(f, "Path from {} to {} is IMPOSSIBLE", self.from, self.to),
        }
    }
}

/// Parse a 1-based vertex position typed by the user.
pub fn parse_position(s: &str) -> Result<usize> {
    let s = s.trim();
    s.parse().map_err(|_| Error::BadInput(s.to_string()))
}

/// Run a query between the vertices at 1-based positions `from` and `to`.
pub fn run_query(graph: &mut Graph, from: usize, to: usize) -> Result<QueryReport> {
    let src = to_index(graph, from)?;
    let dst = to_index(graph, to)?;

    let distance = ShortestPathEngine::new().compute(graph, src, dst)?;
    let id = |index| graph.vertex_at(index).map(|v| v.id()).ok_or(GraphError::IndexOutOfRange { index, len: graph.len() });

    Ok(QueryReport {
        from: id(src)?,
        to: id(dst)?,
        distance,
    })
}

fn to_index(graph: &Graph, position: usize) -> Result<usize> {
    let out_of_range = || Error::PositionOutOfRange { position, len: graph.len() };
    let index = position.checked_sub(1).ok_or_else(out_of_range)?;
    graph.check_index(index).map(|v| v.index()).map_err(|_| out_of_range())
}

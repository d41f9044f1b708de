//! Shortest distance search in a weighted directed graph.

pub use spath_graph::{Error, Result};

pub use self::dijkstra::{shortest_distance, PathDistance, QueryState, QueryStats, ShortestPathEngine};
pub use self::frontier::Frontier;

mod dijkstra;
mod frontier;

//! Directed weighted graph used by the shortest path search.

pub use self::distance::Distance;
pub use self::errors::{EdgeDefect, Error, Result};
pub use self::graph::{Edge, Graph, Vertex, VertexHandle, VertexId};
pub use self::weight::Weight;

mod distance;
mod errors;
mod graph;
mod weight;

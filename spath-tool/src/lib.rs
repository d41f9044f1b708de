//! Shortest distance queries from the command line: graph files, sample graph, reports.

pub use self::config::{EdgeSpec, GraphFile};
pub use self::demo::demo_graph;
pub use self::errors::{Error, Result};
pub use self::query::{parse_position, run_query, QueryReport};

mod config;
mod demo;
mod errors;
mod query;

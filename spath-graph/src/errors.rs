use thiserror::Error;

use crate::weight::Weight;

/// Graph construction and lookup errors.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    #[error("Invalid edge: {0}")]
    InvalidEdge(EdgeDefect),

    #[error("Vertex index {index} is out of range, graph has {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Reason why an edge was rejected.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum EdgeDefect {
    #[error("weight {0} is negative")]
    NegativeWeight(i128),

    #[error("vertex does not belong to this graph")]
    ForeignVertex,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<EdgeDefect> for Error {
    fn from(defect: EdgeDefect) -> Self {
        Error::InvalidEdge(defect)
    }
}

pub(crate) fn check_weight<W: Weight>(weight: W) -> Result<u64> {
    weight.into_weight().map_err(Error::InvalidEdge)
}

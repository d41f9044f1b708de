//! Tentative distance value.

use std::fmt;

/// Best known distance from the query source to a vertex.
///
/// `Unset` stands for "not reached yet" and orders after every finite value,
/// so the derived `Ord` can be used directly to pick the closest vertex.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Distance {
    Finite(u64),
    Unset,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unset => None,
        }
    }

    /// Distance after following an edge of the given weight.
    /// `None` when `self` is unset or the sum does not fit.
    pub fn checked_extend(self, weight: u64) -> Option<Distance> {
        match self {
            Distance::Finite(d) => d.checked_add(weight).map(Distance::Finite),
            Distance::Unset => None,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Unset
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unset => write!(f, "inf"),
        }
    }
}

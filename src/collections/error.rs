// src/collections/error.rs

use std::fmt::{self, Debug};

use thiserror::Error;

/// Failure of a dependency sort.
///
/// Both variants carry the offending nodes so callers can report them
/// without re-walking the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError<N: Debug> {
    /// A dependency path leads back to its origin. `chain` starts and ends
    /// with the same node.
    #[error("circular dependency: {}", ChainDisplay(.chain))]
    CircularDependency { chain: Vec<N> },

    /// `dependent` depends on `missing`, which is not part of the input list.
    #[error("no such element: {missing:?} (required by {dependent:?}) is not in the input list")]
    MissingElement { dependent: N, missing: N },
}

impl<N: Debug> SortError<N> {
    /// The cycle chain, if this is a circular dependency error.
    pub fn chain(&self) -> Option<&[N]> {
        match self {
            SortError::CircularDependency { chain } => Some(chain),
            SortError::MissingElement { .. } => None,
        }
    }
}

struct ChainDisplay<'a, N>(&'a [N]);

impl<N: Debug> fmt::Display for ChainDisplay<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node:?}")?;
        }
        Ok(())
    }
}

/// Failure while packing or unpacking ordinal bit sets.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagsError {
    #[error("ordinal {ordinal} does not fit into a 64-bit set")]
    OrdinalOutOfRange { ordinal: u32 },

    #[error("bit {bit} is set but maps to no known value")]
    UnknownBit { bit: u32 },
}

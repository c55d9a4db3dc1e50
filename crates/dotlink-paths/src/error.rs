//! Error types for search invocation.

use dotlink_core::Pos;
use std::fmt;

/// A search was requested with endpoints that break its preconditions.
///
/// These are caller mistakes, reported before the grid is touched. An
/// unreachable goal is not an error: it is [`Outcome::NotFound`](crate::Outcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid dimension.
        rows: usize,
    },
    /// Start and goal are the same cell.
    SameEndpoints(Pos),
    /// An endpoint is a Blocked cell.
    BlockedEndpoint(Pos),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows } => {
                write!(f, "position {pos} out of bounds for a {rows}x{rows} grid")
            }
            Self::SameEndpoints(pos) => write!(f, "start and goal are both {pos}"),
            Self::BlockedEndpoint(pos) => write!(f, "endpoint {pos} is blocked"),
        }
    }
}

impl std::error::Error for SearchError {}

//! Shortest-path search on dotlink grids.
//!
//! [`search`] runs A\* with the Manhattan heuristic over a
//! [`Grid`](dotlink_core::Grid) using four-directional, unit-cost moves.
//! The search marks its progress directly on the grid (Open, Closed, Path
//! roles) and reports every step to a [`StepObserver`], which may render
//! the grid and may ask the run to stop.
//!
//! | Outcome | Meaning |
//! |---|---|
//! | [`Outcome::Found`] | optimal path from start (exclusive) to goal (inclusive) |
//! | [`Outcome::NotFound`] | goal unreachable under the current obstacles |
//! | [`Outcome::Aborted`] | the observer returned [`Flow::Abort`] |
//!
//! Bad endpoints (out of bounds, identical, blocked) are a [`SearchError`].

mod astar;
mod error;
mod frontier;
pub mod observer;
mod reconstruct;
mod state;

pub use astar::{Outcome, Path, search};
pub use error::SearchError;
pub use frontier::Frontier;
pub use observer::{AbortToken, Flow, Quiet, Step, StepLimit, StepObserver};
pub use reconstruct::{PredecessorMap, reconstruct, trace};

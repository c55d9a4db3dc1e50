//! **dotlink-core** — grid model for the dotlink shortest-path engine.
//!
//! This crate provides the passive data the search operates on: positions
//! and directions, role-tagged cells, the square [`Grid`] with on-demand
//! neighbour computation, its geometry configuration, and a small text
//! format for describing grids.

pub mod cell;
pub mod config;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, Role};
pub use config::{DEFAULT_ROWS, DEFAULT_WIDTH, GridConfig};
pub use geom::{Dir, Pos, manhattan};
pub use grid::Grid;
pub use layout::{Layout, LayoutError};

use dotlink_core::Grid;

use crate::frontier::Frontier;
use crate::reconstruct::PredecessorMap;

/// Sentinel `g` for cells not yet discovered in this run.
pub(crate) const UNREACHED: u32 = u32::MAX;

/// Per-cell search bookkeeping.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) f: u32,
    /// Frontier membership.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            f: UNREACHED,
            open: false,
        }
    }
}

/// Everything one search run owns. Dropped when the run ends.
pub(crate) struct SearchState {
    pub(crate) nodes: Vec<Node>,
    pub(crate) frontier: Frontier,
    pub(crate) came_from: PredecessorMap,
    pub(crate) expanded: usize,
}

impl SearchState {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            frontier: Frontier::new(),
            came_from: PredecessorMap::new(grid.rows()),
            expanded: 0,
        }
    }
}

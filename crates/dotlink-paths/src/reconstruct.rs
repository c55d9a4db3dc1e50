//! Turning a predecessor map into an ordered path.

use dotlink_core::{Grid, Pos, Role};

use crate::observer::{Flow, Step, StepObserver};

/// Best known predecessor of each discovered cell (the `came_from` map).
///
/// Backed by a flat row-major array sized to the grid, like the other
/// per-run search tables.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    parents: Vec<Option<Pos>>,
    rows: usize,
}

impl PredecessorMap {
    /// An empty map for a `rows × rows` grid.
    pub fn new(rows: usize) -> Self {
        Self {
            parents: vec![None; rows * rows],
            rows,
        }
    }

    #[inline]
    fn idx(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.rows).then(|| pos.row * self.rows + pos.col)
    }

    /// Record that the best known way into `pos` comes from `prev`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn insert(&mut self, pos: Pos, prev: Pos) {
        let Some(i) = self.idx(pos) else {
            panic!("position {pos} out of bounds for a {n}x{n} grid", n = self.rows);
        };
        self.parents[i] = Some(prev);
    }

    /// Predecessor of `pos`, or `None` if `pos` has none (the start cell,
    /// undiscovered cells, or positions outside the grid).
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Pos> {
        self.idx(pos).and_then(|i| self.parents[i])
    }

    /// Number of cells with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.parents.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Follow predecessors back from `goal` until a cell with none is reached.
///
/// Returns the cells in start→goal order, excluding the start cell and
/// including `goal`. A goal with no predecessor yields an empty path.
pub fn reconstruct(came_from: &PredecessorMap, goal: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(prev) = came_from.get(current) {
        path.push(current);
        current = prev;
    }
    path.reverse();
    path
}

/// Mark the intermediate cells of `path` as Path, walking from the goal
/// back towards the start, with one observer call per marked cell.
///
/// `path` is in the shape returned by [`reconstruct`]; its last cell (the
/// goal) is left untouched. Stops at the first [`Flow::Abort`].
pub fn trace<O: StepObserver + ?Sized>(grid: &mut Grid, path: &[Pos], observer: &mut O) -> Flow {
    for &pos in path.iter().rev().skip(1) {
        grid.set_role(pos, Role::Path);
        if observer.on_step(grid, Step::Traced(pos)).is_abort() {
            return Flow::Abort;
        }
    }
    Flow::Continue
}

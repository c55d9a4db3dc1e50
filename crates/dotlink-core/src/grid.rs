//! The [`Grid`] type — a square, row-major collection of [`Cell`]s.
//!
//! The grid owns every cell for the lifetime of a session. Neighbour
//! relationships are never stored: they are recomputed from the current
//! Blocked state on every query, since the editor may change it between
//! searches.

use std::fmt;
use std::ops::Index;

use crate::cell::{Cell, Role};
use crate::config::GridConfig;
use crate::geom::{Dir, Pos};

/// A `rows × rows` grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cell_size: u32,
}

impl Grid {
    /// Build a `rows × rows` grid of Empty cells laid out in row-major order.
    ///
    /// `width` is the total pixel width of the rendered grid; only the
    /// derived cell size is kept.
    pub fn build(rows: usize, width: u32) -> Self {
        Self::with_config(&GridConfig { rows, width })
    }

    /// Build a grid from a [`GridConfig`].
    pub fn with_config(cfg: &GridConfig) -> Self {
        let rows = cfg.rows;
        let mut cells = Vec::with_capacity(rows * rows);
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Pos::new(row, col)));
            }
        }
        Self {
            cells,
            rows,
            cell_size: cfg.cell_size(),
        }
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pixel size of one cell.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }

    /// Flat row-major index of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn index_of(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds for a {n}x{n} grid",
            n = self.rows
        );
        pos.row * self.rows + pos.col
    }

    /// The cell at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.rows + pos.col)
    }

    /// Role of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn role(&self, pos: Pos) -> Role {
        self[pos].role
    }

    /// Change the role of the cell at `pos`.
    ///
    /// No invariant is checked here: keeping a single Start and a single
    /// Goal is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn set_role(&mut self, pos: Pos, role: Role) {
        let i = self.index_of(pos);
        self.cells[i].role = role;
    }

    /// Append the traversable neighbours of `pos` into `buf`, in the fixed
    /// order down, up, right, left. Blocked cells are skipped. The caller
    /// clears `buf` before calling.
    pub fn neighbors_into(&self, pos: Pos, buf: &mut Vec<Pos>) {
        for dir in Dir::ALL {
            let Some(n) = pos.step(dir, self.rows) else {
                continue;
            };
            if !self[n].is_blocked() {
                buf.push(n);
            }
        }
    }

    /// Traversable neighbours of `pos` (down, up, right, left).
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    /// Reset every cell to Empty.
    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            c.role = Role::Empty;
        }
    }

    /// Remove the Open / Closed / Path markers left by a previous search,
    /// keeping Start, Goal and Blocked cells.
    pub fn reset_search(&mut self) {
        for c in self.cells.iter_mut() {
            if c.role.is_search_mark() {
                c.role = Role::Empty;
            }
        }
    }

    /// First cell (row-major) holding `role`.
    pub fn find(&self, role: Role) -> Option<Pos> {
        self.cells.iter().find(|c| c.role == role).map(|c| c.pos)
    }

    /// How many cells hold `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    /// The cell under pixel `(x, y)`, or `None` outside the grid.
    ///
    /// `x` selects the row and `y` the column, matching
    /// [`pixel_origin`](Self::pixel_origin).
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<Pos> {
        if self.cell_size == 0 {
            return None;
        }
        let pos = Pos::new(
            (x / self.cell_size) as usize,
            (y / self.cell_size) as usize,
        );
        self.contains(pos).then_some(pos)
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn pixel_origin(&self, pos: Pos) -> (u32, u32) {
        (
            pos.row as u32 * self.cell_size,
            pos.col as u32 * self.cell_size,
        )
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, pos: Pos) -> &Cell {
        &self.cells[self.index_of(pos)]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// One line per row, one glyph per cell (see [`Role::glyph`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.rows.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for c in line {
                write!(f, "{}", c.role.glyph())?;
            }
        }
        Ok(())
    }
}

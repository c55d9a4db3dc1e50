//! Grid coordinates: [`Pos`], [`Dir`] and the [`manhattan`] metric.
//!
//! Coordinates are `(row, col)`, both 0-indexed. Rows grow downwards and
//! columns grow to the right, so "down" means `row + 1`.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate on a square grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent position in direction `dir`, or `None` if it would fall
    /// outside a `rows × rows` grid.
    #[inline]
    pub fn step(self, dir: Dir, rows: usize) -> Option<Pos> {
        match dir {
            Dir::Down if self.row + 1 < rows => Some(Self::new(self.row + 1, self.col)),
            Dir::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Dir::Right if self.col + 1 < rows => Some(Self::new(self.row, self.col + 1)),
            Dir::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            _ => None,
        }
    }

    /// Whether `other` is one of the four cardinal neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        manhattan(self, other) == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Down,
    Up,
    Right,
    Left,
}

impl Dir {
    /// Neighbour enumeration order. Equal-priority frontier entries are
    /// expanded in the order they were discovered, so this order is part of
    /// the search's observable behaviour.
    pub const ALL: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(1, 7);
        let b = Pos::new(4, 2);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn step_respects_edges() {
        let corner = Pos::ZERO;
        assert_eq!(corner.step(Dir::Up, 3), None);
        assert_eq!(corner.step(Dir::Left, 3), None);
        assert_eq!(corner.step(Dir::Down, 3), Some(Pos::new(1, 0)));
        assert_eq!(corner.step(Dir::Right, 3), Some(Pos::new(0, 1)));

        let far = Pos::new(2, 2);
        assert_eq!(far.step(Dir::Down, 3), None);
        assert_eq!(far.step(Dir::Right, 3), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn adjacency() {
        let p = Pos::new(2, 2);
        assert!(p.is_adjacent(Pos::new(3, 2)));
        assert!(p.is_adjacent(Pos::new(2, 1)));
        assert!(!p.is_adjacent(Pos::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(3, 4).to_string(), "(3, 4)");
    }
}

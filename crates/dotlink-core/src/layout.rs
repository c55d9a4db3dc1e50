//! Grids described as text.
//!
//! A [`Layout`] parses an ASCII picture of a square grid, one line per row
//! and one [`Role::glyph`] per cell:
//!
//! ```text
//! S..#
//! .#..
//! .#.#
//! ...G
//! ```
//!
//! Leading and trailing whitespace of the whole text is trimmed, individual
//! lines are taken as-is.

use std::fmt;
use std::str::FromStr;

use crate::cell::Role;
use crate::config::DEFAULT_WIDTH;
use crate::geom::Pos;
use crate::grid::Grid;

/// A parsed square grid picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    roles: Vec<Role>,
    rows: usize,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Every line must have the same width, the picture must be square, and
    /// at most one Start and one Goal may appear.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut roles = Vec::new();
        let mut width: Option<usize> = None;
        let mut start: Option<Pos> = None;
        let mut goal: Option<Pos> = None;
        let mut height = 0;

        for (row, line) in s.lines().enumerate() {
            let mut col = 0;
            for ch in line.chars() {
                let pos = Pos::new(row, col);
                let role = Role::from_glyph(ch).ok_or(LayoutError::InvalidGlyph { ch, pos })?;
                let slot = match role {
                    Role::Start => Some(&mut start),
                    Role::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if let Some(first) = *slot {
                        return Err(LayoutError::Duplicate {
                            role,
                            first,
                            second: pos,
                        });
                    }
                    *slot = Some(pos);
                }
                roles.push(role);
                col += 1;
            }
            match width {
                None => width = Some(col),
                Some(w) if w != col => {
                    return Err(LayoutError::InconsistentWidth {
                        row,
                        expected: w,
                        found: col,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width != height {
            return Err(LayoutError::NotSquare { width, height });
        }

        Ok(Self {
            roles,
            rows: height,
        })
    }

    /// Number of rows (equal to the number of columns).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Role at `pos`, or `None` outside the layout.
    pub fn role(&self, pos: Pos) -> Option<Role> {
        if pos.row >= self.rows || pos.col >= self.rows {
            return None;
        }
        self.roles.get(pos.row * self.rows + pos.col).copied()
    }

    /// Visit every position with its role, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Role)> + '_ {
        let rows = self.rows;
        self.roles
            .iter()
            .enumerate()
            .map(move |(i, &r)| (Pos::new(i / rows, i % rows), r))
    }

    /// Build a grid of `width` pixels showing this layout.
    pub fn to_grid(&self, width: u32) -> Grid {
        let mut grid = Grid::build(self.rows, width);
        for (pos, role) in self.iter() {
            grid.set_role(pos, role);
        }
        grid
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    /// Parse a [`Layout`] and build it at the default pixel width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Layout::parse(s)?.to_grid(DEFAULT_WIDTH))
    }
}

// ---------------------------------------------------------------------------
// LayoutError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows at all.
    Empty,
    /// A line differs in width from the first line.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The picture is not square.
    NotSquare { width: usize, height: usize },
    /// A character that is not a role glyph.
    InvalidGlyph { ch: char, pos: Pos },
    /// More than one Start or Goal.
    Duplicate { role: Role, first: Pos, second: Pos },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has {found} cells, expected {expected}"
            ),
            Self::NotSquare { width, height } => {
                write!(f, "layout: grid must be square, got {width}x{height}")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Duplicate {
                role,
                first,
                second,
            } => write!(f, "layout: second {role:?} at {second} (first at {first})"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S..#
.#..
.#.#
...G";

    #[test]
    fn parse_and_size() {
        let l = Layout::parse(MAZE).unwrap();
        assert_eq!(l.rows(), 4);
        assert_eq!(l.role(Pos::ZERO), Some(Role::Start));
        assert_eq!(l.role(Pos::new(0, 3)), Some(Role::Blocked));
        assert_eq!(l.role(Pos::new(3, 3)), Some(Role::Goal));
        assert_eq!(l.role(Pos::new(4, 0)), None);
    }

    #[test]
    fn grid_round_trips_through_display() {
        let g: Grid = MAZE.parse().unwrap();
        assert_eq!(g.to_string(), MAZE);
        assert_eq!(g.find(Role::Start), Some(Pos::ZERO));
        assert_eq!(g.find(Role::Goal), Some(Pos::new(3, 3)));
        assert_eq!(g.count(Role::Blocked), 4);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let l = Layout::parse("\n\n  S.\n.G\n\n").unwrap();
        assert_eq!(l.rows(), 2);
        assert_eq!(l.role(Pos::new(1, 1)), Some(Role::Goal));

        // Lines themselves are not trimmed.
        assert_eq!(
            Layout::parse("S.\n G"),
            Err(LayoutError::InvalidGlyph {
                ch: ' ',
                pos: Pos::new(1, 0)
            })
        );
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Layout::parse("S..\n.G\n..."),
            Err(LayoutError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn not_square() {
        assert_eq!(
            Layout::parse("S..\n..G"),
            Err(LayoutError::NotSquare {
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn invalid_glyph_reports_position() {
        let err = Layout::parse("S.\n.?").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidGlyph {
                ch: '?',
                pos: Pos::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn duplicate_start() {
        assert_eq!(
            Layout::parse("S.\n.S"),
            Err(LayoutError::Duplicate {
                role: Role::Start,
                first: Pos::ZERO,
                second: Pos::new(1, 1)
            })
        );
    }

    #[test]
    fn empty_layout() {
        assert_eq!(Layout::parse("  \n "), Err(LayoutError::Empty));
    }
}

//! The [`Cell`] type — a grid position tagged with a [`Role`].

use crate::geom::Pos;

/// What a cell currently is. Exactly one role applies at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Start,
    Goal,
    Blocked,
    /// Discovered by a search, waiting in the frontier.
    Open,
    /// Expanded by a search.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Empty,
        Role::Start,
        Role::Goal,
        Role::Blocked,
        Role::Open,
        Role::Closed,
        Role::Path,
    ];

    /// Glyph used by the text layout format and `Display` for grids.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Blocked => '#',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.glyph() == ch)
    }

    /// Markers a search leaves behind (Open, Closed, Path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// A single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub role: Role,
}

impl Cell {
    /// An empty cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            role: Role::Empty,
        }
    }

    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.pos.col
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.role == Role::Blocked
    }
}

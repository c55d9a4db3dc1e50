//! Grid geometry configuration.

/// Number of rows (and columns) used when nothing else is requested.
pub const DEFAULT_ROWS: usize = 50;

/// Total pixel width of the rendered grid used when nothing else is requested.
pub const DEFAULT_WIDTH: u32 = 800;

/// Configuration for building a [`Grid`](crate::Grid).
///
/// `width` is a rendering concern only: the grid keeps `width / rows` as the
/// pixel size of one cell so that a front-end can map clicks back to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: usize,
    pub width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GridConfig {
    /// Set the number of rows (builder).
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the pixel width (builder).
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Pixel size of one cell. Zero when `rows` is zero.
    pub fn cell_size(&self) -> u32 {
        if self.rows == 0 {
            return 0;
        }
        (self.width as usize / self.rows) as u32
    }
}

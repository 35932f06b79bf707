//! Two-dimensional forest grid
//!
//! A fixed-size rectangular table of [`CellState`] stored in row-major order
//! (`index = row * width + col`). Coordinates are always given as `(col, row)`,
//! i.e. `(x, y)`, with row 0 at the top.

use crate::core_types::CellState;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-state cell counts for a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCensus {
    pub empty: usize,
    pub flammable: usize,
    pub burning: usize,
    pub burnt: usize,
    pub pending: usize,
}

impl CellCensus {
    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.empty + self.flammable + self.burning + self.burnt + self.pending
    }

    fn record(&mut self, state: CellState) {
        match state {
            CellState::Empty => self.empty += 1,
            CellState::Flammable => self.flammable += 1,
            CellState::Burning => self.burning += 1,
            CellState::Burnt => self.burnt += 1,
            CellState::PendingIgnite => self.pending += 1,
        }
    }
}

/// Rectangular terrain grid, fixed in size for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct ForestGrid {
    /// Number of columns
    pub(crate) width: usize,
    /// Number of rows
    pub(crate) height: usize,
    /// Cell states (row-major order: [row * width + col])
    pub(crate) cells: Vec<CellState>,
}

/// Unchecked serialized form, validated before it becomes a [`ForestGrid`]
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl TryFrom<RawGrid> for ForestGrid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if raw.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        let Some(area) = raw.width.checked_mul(raw.height) else {
            return Err(ConfigError::GridTooLarge {
                width: raw.width,
                height: raw.height,
            });
        };
        if raw.cells.len() != area {
            return Err(ConfigError::CellCountMismatch {
                width: raw.width,
                height: raw.height,
                cells: raw.cells.len(),
            });
        }

        Ok(ForestGrid {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

impl ForestGrid {
    /// Create a grid where every cell is `Empty`.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, CellState::Empty)
    }

    /// Create a grid where every cell has the same state
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        ForestGrid {
            width,
            height,
            cells: vec![state; width * height],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` if there are no rows, the rows are empty, or they differ in length.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();

        Some(ForestGrid {
            width,
            height: rows.len(),
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    /// Row-major index of `(col, row)`, or `None` when out of bounds
    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    /// `(col, row)` of a row-major index
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// State at `(col, row)`
    pub fn get(&self, col: usize, row: usize) -> Option<CellState> {
        self.index_of(col, row).map(|i| self.cells[i])
    }

    /// Mutable state at `(col, row)`
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut CellState> {
        let i = self.index_of(col, row)?;
        Some(&mut self.cells[i])
    }

    /// Overwrite the state at `(col, row)`. Returns false when out of bounds.
    pub fn set(&mut self, col: usize, row: usize, state: CellState) -> bool {
        match self.get_mut(col, row) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// Orthogonal neighbors of a cell that lie inside the grid.
    ///
    /// Always in the order up, right, down, left; out-of-bounds slots are `None`.
    pub fn orthogonal_neighbors(&self, index: usize) -> [Option<usize>; 4] {
        let (col, row) = self.coords_of(index);
        [
            (row > 0).then(|| index - self.width),
            (col + 1 < self.width).then(|| index + 1),
            (row + 1 < self.height).then(|| index + self.width),
            (col > 0).then(|| index - 1),
        ]
    }

    /// Where the fire starts: `(width / 2, height / 2)` as `(col, row)`
    pub fn ignition_point(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Count every state in a single pass
    pub fn census(&self) -> CellCensus {
        let mut census = CellCensus::default();
        for &cell in &self.cells {
            census.record(cell);
        }
        census
    }
}

impl fmt::Display for ForestGrid {
    /// One line of glyphs per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

//! Color grids: the rectangular integer matrices every puzzle is made of.

use serde::ser::{Serialize, Serializer};

/// Reserved background color. Never part of the rotating palette.
pub const BACKGROUND: u8 = 0;

/// Largest valid color value.
pub const MAX_COLOR: u8 = 9;

/// Number of foreground colors (1 through 9).
pub const FOREGROUND_COLORS: u8 = 9;

/// Errors raised when raw cell data does not form a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// The grid has no rows
    #[error("grid has no rows")]
    NoRows,

    /// The grid has rows but no columns
    #[error("grid has no columns")]
    NoColumns,

    /// A row length differs from the first row
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    /// A cell value lies outside 0..=9
    #[error("cell ({row}, {col}) has value {value}, expected 0..=9")]
    ValueOutOfRange { row: usize, col: usize, value: i128 },
}

impl GridError {
    /// Whether this is a value-domain problem rather than a shape problem.
    pub fn is_domain(&self) -> bool {
        matches!(self, GridError::ValueOutOfRange { .. })
    }
}

/// A non-empty rectangular matrix of colors in `0..=9`, stored row-major.
///
/// A `Grid` can only be built through validating constructors, so every
/// value in circulation upholds the shape and color invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from rows of colors, validating shape and domain.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let raw = rows.into_iter().map(|row| row.into_iter().map(i128::from).collect()).collect();
        Self::from_raw(raw)
    }

    /// Build a grid from untyped integer rows as they appear in puzzle JSON.
    ///
    /// Any integer outside `0..=9` is a domain error, however large.
    pub fn from_raw(rows: Vec<Vec<i128>>) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::NoRows);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GridError::NoColumns);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged { row: r, expected: width, found: row.len() });
            }
            for (c, &value) in row.iter().enumerate() {
                if value < 0 || value > i128::from(MAX_COLOR) {
                    return Err(GridError::ValueOutOfRange { row: r, col: c, value });
                }
                cells.push(value as u8);
            }
        }

        Ok(Self { height, width, cells })
    }

    /// Build a grid by evaluating `cell(row, col)` for every position.
    ///
    /// Callers must pass non-zero dimensions and produce colors in `0..=9`;
    /// transforms only ever copy or remap existing cells.
    pub(crate) fn from_fn(
        height: usize,
        width: usize,
        mut cell: impl FnMut(usize, usize) -> u8,
    ) -> Self {
        debug_assert!(height > 0 && width > 0);
        let mut cells = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                let value = cell(r, c);
                debug_assert!(value <= MAX_COLOR);
                cells.push(value);
            }
        }
        Self { height, width, cells }
    }

    /// Build a same-shaped grid by remapping every color.
    pub(crate) fn map_cells(&self, f: impl FnMut(u8) -> u8) -> Self {
        let cells: Vec<u8> = self.cells.iter().copied().map(f).collect();
        debug_assert!(cells.iter().all(|&v| v <= MAX_COLOR));
        Self { height: self.height, width: self.width, cells }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Color at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.width + col]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

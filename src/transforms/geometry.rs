//! Rotations, mirrors, reflective concatenation and transpose.
//!
//! None of these can fail: every output cell is copied from an input cell and
//! the output dimensions are the input dimensions, swapped or doubled.

use crate::models::Grid;

/// Rotate 90 degrees clockwise.
pub fn rotate90(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(w, h, |r, c| grid.get(h - 1 - c, r))
}

/// Rotate 180 degrees.
pub fn rotate180(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(h, w, |r, c| grid.get(h - 1 - r, w - 1 - c))
}

/// Rotate 270 degrees clockwise (90 counter-clockwise).
pub fn rotate270(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(w, h, |r, c| grid.get(c, w - 1 - r))
}

/// Reverse every row.
pub fn flip_horizontal(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(h, w, |r, c| grid.get(r, w - 1 - c))
}

/// Reverse the row order.
pub fn flip_vertical(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(h, w, |r, c| grid.get(h - 1 - r, c))
}

/// Swap rows and columns.
pub fn transpose(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(w, h, |r, c| grid.get(c, r))
}

/// Original on the left, horizontal mirror appended on the right.
pub fn reflect_to_the_right(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(h, 2 * w, |r, c| if c < w { grid.get(r, c) } else { grid.get(r, 2 * w - 1 - c) })
}

/// Horizontal mirror on the left, original on the right.
pub fn reflect_to_the_left(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(h, 2 * w, |r, c| if c < w { grid.get(r, w - 1 - c) } else { grid.get(r, c - w) })
}

/// Original on top, vertical mirror appended below.
pub fn reflect_to_the_bottom(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(2 * h, w, |r, c| if r < h { grid.get(r, c) } else { grid.get(2 * h - 1 - r, c) })
}

/// Vertical mirror on top, original below.
pub fn reflect_to_the_top(grid: &Grid) -> Grid {
    let (h, w) = grid.shape();
    Grid::from_fn(2 * h, w, |r, c| if r < h { grid.get(h - 1 - r, c) } else { grid.get(r - h, c) })
}

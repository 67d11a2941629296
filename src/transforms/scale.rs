//! Nearest-neighbor replication along one or both axes.
//!
//! A factor of 0 or 1 returns the input unchanged.

use crate::models::Grid;

use super::types::TransformError;

/// Compute the scaled shape, rejecting sizes that overflow.
fn scaled_shape(
    op: &'static str,
    grid: &Grid,
    row_factor: usize,
    col_factor: usize,
) -> Result<(usize, usize), TransformError> {
    let (h, w) = grid.shape();
    let overflow = || TransformError::Shape {
        op,
        message: format!("{}x{} grid scaled by {}x{} overflows", h, w, row_factor, col_factor),
    };
    let height = h.checked_mul(row_factor).ok_or_else(overflow)?;
    let width = w.checked_mul(col_factor).ok_or_else(overflow)?;
    height.checked_mul(width).ok_or_else(overflow)?;
    Ok((height, width))
}

fn replicate(
    op: &'static str,
    grid: &Grid,
    row_factor: usize,
    col_factor: usize,
) -> Result<Grid, TransformError> {
    let (height, width) = scaled_shape(op, grid, row_factor, col_factor)?;
    Ok(Grid::from_fn(height, width, |r, c| grid.get(r / row_factor, c / col_factor)))
}

/// Expand every cell into a `factor x factor` block.
pub fn increase_resolution(grid: &Grid, factor: usize) -> Result<Grid, TransformError> {
    if factor <= 1 {
        return Ok(grid.clone());
    }
    replicate("increase_resolution", grid, factor, factor)
}

/// Repeat every row `factor` times.
pub fn increase_height(grid: &Grid, factor: usize) -> Result<Grid, TransformError> {
    if factor <= 1 {
        return Ok(grid.clone());
    }
    replicate("increase_height", grid, factor, 1)
}

/// Repeat every column `factor` times.
pub fn increase_width(grid: &Grid, factor: usize) -> Result<Grid, TransformError> {
    if factor <= 1 {
        return Ok(grid.clone());
    }
    replicate("increase_width", grid, 1, factor)
}

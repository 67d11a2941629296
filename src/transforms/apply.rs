//! Transform application to grids and puzzles
//!
//! Dispatches each `Transform` variant to its primitive and runs chains step
//! by step.

use crate::models::{Grid, GridLocation, Puzzle};

use super::geometry;
use super::palette::roll_colors;
use super::scale::{increase_height, increase_resolution, increase_width};
use super::types::{Transform, TransformError};

/// Apply a single transform to a grid, producing a new grid.
///
/// The input is never modified, so one source grid can feed any number of
/// transforms.
pub fn apply_grid_transform(grid: &Grid, transform: &Transform) -> Result<Grid, TransformError> {
    match transform {
        Transform::Identity => Ok(grid.clone()),
        Transform::Rotate90 => Ok(geometry::rotate90(grid)),
        Transform::Rotate180 => Ok(geometry::rotate180(grid)),
        Transform::Rotate270 => Ok(geometry::rotate270(grid)),
        Transform::FlipHorizontal => Ok(geometry::flip_horizontal(grid)),
        Transform::FlipVertical => Ok(geometry::flip_vertical(grid)),
        Transform::ReflectRight => Ok(geometry::reflect_to_the_right(grid)),
        Transform::ReflectLeft => Ok(geometry::reflect_to_the_left(grid)),
        Transform::ReflectBottom => Ok(geometry::reflect_to_the_bottom(grid)),
        Transform::ReflectTop => Ok(geometry::reflect_to_the_top(grid)),
        Transform::Transpose => Ok(geometry::transpose(grid)),
        Transform::IncreaseResolution { factor } => increase_resolution(grid, *factor),
        Transform::IncreaseHeight { factor } => increase_height(grid, *factor),
        Transform::IncreaseWidth { factor } => increase_width(grid, *factor),
        Transform::RollColors { shift } => roll_colors(grid, *shift),
        Transform::Chain(steps) => apply_grid_transforms(grid, steps),
    }
}

/// Apply a sequence of transforms in order.
pub fn apply_grid_transforms(grid: &Grid, transforms: &[Transform]) -> Result<Grid, TransformError> {
    let mut result = grid.clone();
    for transform in transforms {
        result = apply_grid_transform(&result, transform)?;
    }
    Ok(result)
}

/// Apply one transform to every input and output grid of a puzzle.
///
/// Train/test membership and example order are preserved. On failure the
/// location of the first grid that could not be transformed is returned.
pub fn apply_puzzle_transform(
    puzzle: &Puzzle,
    transform: &Transform,
) -> Result<Puzzle, (GridLocation, TransformError)> {
    puzzle.try_map_grids(|grid| apply_grid_transform(grid, transform))
}

impl Transform {
    /// Apply this transform to a grid. See [`apply_grid_transform`].
    pub fn apply(&self, grid: &Grid) -> Result<Grid, TransformError> {
        apply_grid_transform(grid, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamplePair, Section, Side};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_identity_returns_equal_grid() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(Transform::Identity.apply(&g).unwrap(), g);
    }

    #[test]
    fn test_chain_applies_left_to_right() {
        const STEPS: &[Transform] = &[Transform::Rotate90, Transform::RollColors { shift: 1 }];
        let g = grid(&[&[1, 2, 3], &[4, 5, 0]]);
        let out = Transform::Chain(STEPS).apply(&g).unwrap();
        assert_eq!(out, grid(&[&[5, 2], &[6, 3], &[0, 4]]));
    }

    #[test]
    fn test_chain_order_matters() {
        const A: &[Transform] = &[Transform::ReflectRight, Transform::Rotate90];
        const B: &[Transform] = &[Transform::Rotate90, Transform::ReflectRight];
        let g = grid(&[&[1, 2, 3], &[4, 5, 0]]);
        let a = Transform::Chain(A).apply(&g).unwrap();
        let b = Transform::Chain(B).apply(&g).unwrap();
        assert_eq!(a.shape(), (6, 2));
        assert_eq!(b.shape(), (3, 4));
    }

    #[test]
    fn test_chain_propagates_errors() {
        const STEPS: &[Transform] =
            &[Transform::Rotate90, Transform::IncreaseWidth { factor: usize::MAX }];
        let g = grid(&[&[1, 2]]);
        assert!(Transform::Chain(STEPS).apply(&g).is_err());
    }

    #[test]
    fn test_puzzle_transform_pairs_both_sides() {
        let puzzle = Puzzle::new(
            vec![ExamplePair::new(grid(&[&[1, 0]]), grid(&[&[0, 2]]))],
            vec![ExamplePair::new(grid(&[&[3]]), grid(&[&[4], &[5]]))],
        );
        let out = apply_puzzle_transform(&puzzle, &Transform::FlipHorizontal).unwrap();
        assert_eq!(out.train[0].input, grid(&[&[0, 1]]));
        assert_eq!(out.train[0].output, grid(&[&[2, 0]]));
        assert_eq!(out.test[0].output, grid(&[&[4], &[5]]));
    }

    #[test]
    fn test_puzzle_transform_error_location() {
        let puzzle = Puzzle::new(
            vec![ExamplePair::new(grid(&[&[1]]), grid(&[&[2]]))],
            vec![ExamplePair::new(grid(&[&[3]]), grid(&[&[4]]))],
        );
        let bad = Transform::IncreaseResolution { factor: usize::MAX };
        let (location, err) = apply_puzzle_transform(&puzzle, &bad).unwrap_err();
        assert_eq!(location, GridLocation::new(Section::Train, 0, Side::Input));
        assert!(matches!(err, TransformError::Shape { .. }));
    }
}

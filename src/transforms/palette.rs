//! Cyclic palette rotation.
//!
//! Foreground colors 1..=9 form a cycle of length 9. Rolling by `shift`
//! maps `v` to `((v - 1 + shift) mod 9) + 1`; background (0) is a fixed point.

use crate::models::{Grid, BACKGROUND, FOREGROUND_COLORS, MAX_COLOR};

use super::types::TransformError;

/// Image of one color under a roll by `shift`.
///
/// Values outside the palette are returned unchanged.
pub fn roll_color(value: u8, shift: u8) -> u8 {
    if value == BACKGROUND || value > MAX_COLOR {
        return value;
    }
    let shift = shift % FOREGROUND_COLORS;
    (value - 1 + shift) % FOREGROUND_COLORS + 1
}

/// Shift every foreground color by `shift` positions around the palette.
///
/// A shift that is a multiple of 9 returns the grid unchanged.
pub fn roll_colors(grid: &Grid, shift: u8) -> Result<Grid, TransformError> {
    if shift % FOREGROUND_COLORS == 0 {
        return Ok(grid.clone());
    }

    let rolled = grid.map_cells(|v| roll_color(v, shift));

    // foreground must never land on background
    for (&before, &after) in grid.cells().iter().zip(rolled.cells()) {
        if before != BACKGROUND && after == BACKGROUND {
            return Err(TransformError::Domain {
                op: "roll_colors",
                message: format!("color {} mapped onto background by shift {}", before, shift),
            });
        }
    }

    Ok(rolled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_color_cycle() {
        assert_eq!(roll_color(1, 1), 2);
        assert_eq!(roll_color(9, 1), 1);
        assert_eq!(roll_color(5, 5), 1);
        assert_eq!(roll_color(4, 5), 9);
        assert_eq!(roll_color(0, 3), 0);
        assert_eq!(roll_color(3, 9), 3);
        assert_eq!(roll_color(3, 255), 3 + 255 % 9);
    }

    #[test]
    fn test_roll_color_outside_palette_is_fixed() {
        assert_eq!(roll_color(10, 3), 10);
        assert_eq!(roll_color(250, 8), 250);
        assert_eq!(roll_color(u8::MAX, u8::MAX), u8::MAX);
    }

    #[test]
    fn test_roll_colors_keeps_background() {
        let grid = Grid::new(vec![vec![1, 2], vec![0, 3]]).unwrap();
        let rolled = roll_colors(&grid, 1).unwrap();
        assert_eq!(rolled.to_rows(), vec![vec![2, 3], vec![0, 4]]);
    }

    #[test]
    fn test_roll_colors_zero_shift_is_noop() {
        let grid = Grid::new(vec![vec![1, 9, 0]]).unwrap();
        assert_eq!(roll_colors(&grid, 0).unwrap(), grid);
        assert_eq!(roll_colors(&grid, 9).unwrap(), grid);
    }

    #[test]
    fn test_roll_colors_is_a_permutation_of_foreground() {
        let all = Grid::new(vec![(0..=9).collect()]).unwrap();
        for shift in 1..9 {
            let rolled = roll_colors(&all, shift).unwrap();
            let mut foreground: Vec<u8> = rolled.cells()[1..].to_vec();
            foreground.sort_unstable();
            assert_eq!(foreground, (1..=9).collect::<Vec<u8>>());
            assert_eq!(rolled.get(0, 0), 0);
        }
    }

    #[test]
    fn test_roll_colors_inverse() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![7, 8, 9], vec![0, 0, 5]]).unwrap();
        for shift in 0..9u8 {
            let there = roll_colors(&grid, shift).unwrap();
            let back = roll_colors(&there, (9 - shift) % 9).unwrap();
            assert_eq!(back, grid);
        }
    }
}

//! Grid transforms used to augment puzzles
//!
//! Every transform is a pure function from one grid to a new grid.
//!
//! # Module Structure
//!
//! - [`types`] - The `Transform` enum and `TransformError`
//! - [`geometry`] - Rotations, flips, reflective concatenation, transpose
//! - [`scale`] - Resolution, height and width replication
//! - [`palette`] - Cyclic foreground color roll
//! - [`apply`] - Dispatch to grids and whole puzzles

pub mod apply;
pub mod geometry;
pub mod palette;
pub mod scale;
pub mod types;

// Re-export main types at the module level for convenience
pub use apply::{apply_grid_transform, apply_grid_transforms, apply_puzzle_transform};
pub use geometry::{
    flip_horizontal, flip_vertical, reflect_to_the_bottom, reflect_to_the_left,
    reflect_to_the_right, reflect_to_the_top, rotate180, rotate270, rotate90, transpose,
};
pub use palette::{roll_color, roll_colors};
pub use scale::{increase_height, increase_resolution, increase_width};
pub use types::{Transform, TransformError};


//! Data models for puzzles and their grids

mod grid;
mod puzzle;

pub use grid::{Grid, GridError, BACKGROUND, FOREGROUND_COLORS, MAX_COLOR};
pub use puzzle::{
    load_puzzle, ExamplePair, GridLocation, LoadError, Puzzle, PuzzleError, Section, Side,
};

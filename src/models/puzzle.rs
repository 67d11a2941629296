//! Puzzles: ordered train/test lists of input/output grid pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::grid::{Grid, GridError};

/// Which half of a puzzle an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Train,
    Test,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Train => write!(f, "train"),
            Section::Test => write!(f, "test"),
        }
    }
}

/// Which grid of an example pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => write!(f, "input"),
            Side::Output => write!(f, "output"),
        }
    }
}

/// Position of one grid inside a puzzle, e.g. `train[2].output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLocation {
    pub section: Section,
    pub index: usize,
    pub side: Side,
}

impl GridLocation {
    pub fn new(section: Section, index: usize, side: Side) -> Self {
        Self { section, index, side }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}].{}", self.section, self.index, self.side)
    }
}

/// Errors raised while loading a puzzle document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PuzzleError {
    /// Not JSON, wrong structure, or missing `train`/`test`
    #[error("malformed puzzle: {0}")]
    Format(#[from] serde_json::Error),

    /// A grid failed shape or domain validation
    #[error("invalid grid at {location}: {source}")]
    Grid {
        location: GridLocation,
        #[source]
        source: GridError,
    },
}

/// One `{input, output}` example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamplePair {
    pub input: Grid,
    pub output: Grid,
}

impl ExamplePair {
    pub fn new(input: Grid, output: Grid) -> Self {
        Self { input, output }
    }

    /// Apply `f` to the input and then the output grid.
    ///
    /// Both sides always go through the same closure, so a transform can never
    /// be applied to one side of a pair and not the other.
    pub fn try_map<E>(
        &self,
        mut f: impl FnMut(Side, &Grid) -> Result<Grid, E>,
    ) -> Result<ExamplePair, E> {
        Ok(ExamplePair { input: f(Side::Input, &self.input)?, output: f(Side::Output, &self.output)? })
    }
}

/// A puzzle with ordered `train` and `test` example lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Puzzle {
    pub train: Vec<ExamplePair>,
    pub test: Vec<ExamplePair>,
}

/// One grid cell as written in the file: any JSON integer, range-checked later.
struct RawCell(i128);

impl<'de> Deserialize<'de> for RawCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = serde_json::Number::deserialize(deserializer)?;
        if let Some(v) = n.as_i64() {
            return Ok(RawCell(i128::from(v)));
        }
        if let Some(v) = n.as_u64() {
            return Ok(RawCell(i128::from(v)));
        }
        // integers beyond 64 bits arrive as whole floats
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() >= 9.0e18 => Ok(RawCell(f as i128)),
            _ => Err(serde::de::Error::custom(format!("expected an integer cell, found {n}"))),
        }
    }
}

#[derive(Deserialize)]
struct RawPair {
    input: Vec<Vec<RawCell>>,
    output: Vec<Vec<RawCell>>,
}

#[derive(Deserialize)]
struct RawPuzzle {
    train: Vec<RawPair>,
    test: Vec<RawPair>,
}

impl Puzzle {
    pub fn new(train: Vec<ExamplePair>, test: Vec<ExamplePair>) -> Self {
        Self { train, test }
    }

    /// Parse and validate a puzzle from JSON text.
    ///
    /// Extra top-level keys are ignored.
    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    /// Parse and validate a puzzle from raw file bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PuzzleError> {
        Self::from_raw(serde_json::from_slice(bytes)?)
    }

    fn from_raw(raw: RawPuzzle) -> Result<Self, PuzzleError> {
        Ok(Self {
            train: validate_pairs(raw.train, Section::Train)?,
            test: validate_pairs(raw.test, Section::Test)?,
        })
    }

    /// Serialize to compact JSON with exactly `train` and `test` keys.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Number of examples across both sections.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }

    /// Build a new puzzle by mapping every grid, preserving order and sections.
    ///
    /// The first error stops the map and is returned together with the
    /// location of the grid that produced it.
    pub fn try_map_grids<E>(
        &self,
        mut f: impl FnMut(&Grid) -> Result<Grid, E>,
    ) -> Result<Puzzle, (GridLocation, E)> {
        let mut map_section = |pairs: &[ExamplePair], section: Section| {
            pairs
                .iter()
                .enumerate()
                .map(|(index, pair)| {
                    pair.try_map(|side, grid| {
                        f(grid).map_err(|e| (GridLocation::new(section, index, side), e))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        };

        let train = map_section(&self.train, Section::Train)?;
        let test = map_section(&self.test, Section::Test)?;
        Ok(Puzzle { train, test })
    }
}

fn validate_pairs(raw: Vec<RawPair>, section: Section) -> Result<Vec<ExamplePair>, PuzzleError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, pair)| {
            let grid = |rows: Vec<Vec<RawCell>>, side| {
                let rows = rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.0).collect())
                    .collect();
                Grid::from_raw(rows).map_err(|source| PuzzleError::Grid {
                    location: GridLocation::new(section, index, side),
                    source,
                })
            };
            Ok(ExamplePair::new(grid(pair.input, Side::Input)?, grid(pair.output, Side::Output)?))
        })
        .collect()
}

/// Errors from [`load_puzzle`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Read and validate a puzzle file.
pub fn load_puzzle(path: &Path) -> Result<Puzzle, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(Puzzle::from_json(&text)?)
}

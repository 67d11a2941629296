//! Split statistics for puzzle directories
//!
//! Summarizes each puzzle by its first train pair and tallies histograms
//! over a directory:
//! - Number of shots (train pairs) per puzzle
//! - Whether the first pair's input and output shapes match

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::build::{discover_json_files, DiscoveryError};
use crate::models::{load_puzzle, Puzzle};

/// Summary of one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PuzzleStats {
    /// Number of train pairs
    pub num_shots: usize,
    /// (height, width) of the first train input
    pub input_shape: (usize, usize),
    /// (height, width) of the first train output
    pub output_shape: (usize, usize),
    pub is_shape_equal: bool,
}

/// Summarize a puzzle. Returns `None` when it has no train pairs.
pub fn puzzle_stats(puzzle: &Puzzle) -> Option<PuzzleStats> {
    let first = puzzle.train.first()?;
    let input_shape = first.input.shape();
    let output_shape = first.output.shape();
    Some(PuzzleStats {
        num_shots: puzzle.train.len(),
        input_shape,
        output_shape,
        is_shape_equal: input_shape == output_shape,
    })
}

/// Histograms over a directory of puzzles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatCounts {
    /// Shot count -> number of puzzles
    pub num_shots: BTreeMap<usize, usize>,
    /// "true"/"false" -> number of puzzles
    pub is_shape_equal: BTreeMap<String, usize>,
}

impl StatCounts {
    /// Count one puzzle.
    pub fn add(&mut self, stats: &PuzzleStats) {
        *self.num_shots.entry(stats.num_shots).or_insert(0) += 1;
        *self.is_shape_equal.entry(stats.is_shape_equal.to_string()).or_insert(0) += 1;
    }

    /// Number of puzzles counted.
    pub fn total(&self) -> usize {
        self.num_shots.values().sum()
    }
}

/// Statistics for every readable puzzle in a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    /// Per-puzzle summaries keyed by file stem
    pub puzzles: BTreeMap<String, PuzzleStats>,
    pub counts: StatCounts,
    /// Files that could not be summarized
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

/// Collect statistics for the `*.json` puzzles directly inside `dir`.
///
/// Unreadable or invalid puzzles, and puzzles without train pairs, are
/// logged and listed in `skipped`.
pub fn collect_stats(dir: &Path) -> Result<DirectoryStats, DiscoveryError> {
    let mut result = DirectoryStats::default();

    for path in discover_json_files(dir)? {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        let puzzle = match load_puzzle(&path) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                result.skipped.push(name);
                continue;
            }
        };

        match puzzle_stats(&puzzle) {
            Some(stats) => {
                result.counts.add(&stats);
                result.puzzles.insert(name, stats);
            }
            None => {
                log::warn!("skipping {}: no train pairs", path.display());
                result.skipped.push(name);
            }
        }
    }

    Ok(result)
}

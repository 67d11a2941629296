//! Dataset flattening
//!
//! Reads a directory of puzzle files (sources and variants alike) into flat
//! records keyed `train_input_<i>`, `train_output_<i>`, `test_input_<i>` and
//! `test_output_<i>`. Keys follow example order, train before test.

use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::build::{discover_json_files, DiscoveryError};
use crate::models::{load_puzzle, Puzzle, Section};

/// Error while flattening a directory.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error("failed to encode dataset: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One flattened puzzle.
pub type Record = Map<String, Value>;

fn push_section(record: &mut Record, section: Section, puzzle: &Puzzle) {
    let pairs = match section {
        Section::Train => &puzzle.train,
        Section::Test => &puzzle.test,
    };
    for (i, pair) in pairs.iter().enumerate() {
        record.insert(format!("{}_input_{}", section, i), Value::from(pair.input.to_rows()));
        record.insert(format!("{}_output_{}", section, i), Value::from(pair.output.to_rows()));
    }
}

/// Flatten one puzzle into a record.
pub fn flatten_puzzle(puzzle: &Puzzle) -> Record {
    let mut record = Map::new();
    push_section(&mut record, Section::Train, puzzle);
    push_section(&mut record, Section::Test, puzzle);
    record
}

/// Flatten every readable puzzle in `dir`, in file name order.
///
/// Invalid files are logged and left out.
pub fn flatten_dir(dir: &Path) -> Result<Vec<Record>, DatasetError> {
    let mut records = Vec::new();
    for path in discover_json_files(dir)? {
        match load_puzzle(&path) {
            Ok(puzzle) => records.push(flatten_puzzle(&puzzle)),
            Err(e) => log::warn!("skipping {}: {}", path.display(), e),
        }
    }
    Ok(records)
}

/// Write records as one JSON array.
pub fn write_records(records: &[Record], path: &Path) -> Result<(), DatasetError> {
    let write_err = |source| DatasetError::Write { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

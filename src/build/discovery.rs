//! Source puzzle discovery.
//!
//! Finds the `*.json` puzzle files of a split directory. Only the top level
//! is scanned; puzzles are named by their file stem.

use crate::build::BuildContext;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Error during source discovery.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DiscoveryError {
    /// The split's source directory does not exist
    #[error("source directory not found: {}", .0.display())]
    MissingDir(PathBuf),
    /// Invalid glob pattern
    #[error("invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),
}

/// A source puzzle found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSource {
    /// File stem, used to name the variants
    pub name: String,
    /// Split the puzzle belongs to
    pub split: String,
    /// Path of the source file
    pub path: PathBuf,
}

/// List the `*.json` files directly inside `dir`, sorted by path.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::MissingDir(dir.to_path_buf()));
    }

    let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));
    let paths = glob(&pattern).map_err(|e| DiscoveryError::InvalidPattern(pattern.clone(), e))?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                }
            }
            Err(e) => log::warn!("error reading path: {}", e),
        }
    }

    files.sort();
    Ok(files)
}

/// Discover the source puzzles of one split.
pub fn discover_split(ctx: &BuildContext, split: &str) -> Result<Vec<PuzzleSource>, DiscoveryError> {
    let files = discover_json_files(&ctx.source_dir(split))?;
    Ok(files
        .into_iter()
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            Some(PuzzleSource { name, split: split.to_string(), path })
        })
        .collect())
}

//! Augmentation pipeline for a single puzzle.
//!
//! A puzzle moves through four stages:
//! - **Resume check**: decide which transform ids still need output
//! - **Augment**: apply each required transform to every grid, in memory
//! - **Encode**: serialize every variant before anything touches the disk
//! - **Commit**: stage the files, move them into place, then write the
//!   manifest that marks the variant set complete
//!
//! Any format, shape or domain failure rejects the puzzle with nothing
//! written. Failing to write output is fatal for the whole run.

use crate::build::manifest::{hash_bytes, manifest_path, staging_dir, ManifestError, PuzzleManifest};
use crate::build::{BuildContext, PuzzleResult, PuzzleSource};
use crate::config::ResumeMode;
use crate::models::{GridLocation, Puzzle, PuzzleError};
use crate::registry::{RegistryEntry, TransformRegistry};
use crate::transforms::{apply_puzzle_transform, TransformError};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Failure category reported for every rejected puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not valid JSON, or missing `train`/`test`
    Format,
    /// Empty or ragged grid, or output dimensions that overflow
    Shape,
    /// Cell outside 0..=9, or a foreground color rolled onto background
    Domain,
    /// Reading the source or writing outputs
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Format => "format",
            ErrorKind::Shape => "shape",
            ErrorKind::Domain => "domain",
            ErrorKind::Io => "io",
        };
        f.write_str(s)
    }
}

/// Error while augmenting one puzzle.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AugmentError {
    /// The source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The source file is not a valid puzzle
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    /// A transform rejected one of the puzzle's grids
    #[error("transform {id} ({name}) failed on {location}: {source}")]
    Transform { id: u32, name: &'static str, location: GridLocation, source: TransformError },

    /// A variant could not be encoded
    #[error("failed to encode variant {id}: {source}")]
    Encode { id: u32, source: serde_json::Error },

    /// An output file or directory could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The commit manifest could not be written
    #[error("failed to write manifest {}: {source}", .path.display())]
    Manifest { path: PathBuf, source: ManifestError },
}

impl AugmentError {
    /// Category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AugmentError::Read { .. } | AugmentError::Write { .. } | AugmentError::Manifest { .. } => {
                ErrorKind::Io
            }
            AugmentError::Puzzle(PuzzleError::Grid { source, .. }) if source.is_domain() => {
                ErrorKind::Domain
            }
            AugmentError::Puzzle(PuzzleError::Grid { .. }) => ErrorKind::Shape,
            AugmentError::Puzzle(_) | AugmentError::Encode { .. } => ErrorKind::Format,
            AugmentError::Transform { source, .. } if source.is_domain() => ErrorKind::Domain,
            AugmentError::Transform { .. } => ErrorKind::Shape,
        }
    }

    /// Whether this failure must stop the whole run.
    ///
    /// Only output failures are fatal; everything else is scoped to the
    /// puzzle that caused it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AugmentError::Write { .. } | AugmentError::Manifest { .. })
    }

    /// The transform id involved, if any.
    pub fn transform_id(&self) -> Option<u32> {
        match self {
            AugmentError::Transform { id, .. } | AugmentError::Encode { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// One augmented copy of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Registry id of the transform that produced it
    pub id: u32,
    pub puzzle: Puzzle,
}

/// File name of variant `id` of puzzle `name`.
pub fn variant_file_name(name: &str, id: u32) -> String {
    format!("{}_{:02}.json", name, id)
}

/// Apply every registry entry to `puzzle`, in id order.
pub fn augment(puzzle: &Puzzle, registry: &TransformRegistry) -> Result<Vec<Variant>, AugmentError> {
    augment_entries(puzzle, registry.entries())
}

/// Apply the registry entries named by `ids` to `puzzle`.
///
/// Unknown ids are ignored. Results come back in the order of `ids`.
pub fn augment_ids(
    puzzle: &Puzzle,
    registry: &TransformRegistry,
    ids: &[u32],
) -> Result<Vec<Variant>, AugmentError> {
    let entries: Vec<RegistryEntry> = ids.iter().filter_map(|id| registry.get(*id).copied()).collect();
    augment_entries(puzzle, &entries)
}

fn augment_entries(puzzle: &Puzzle, entries: &[RegistryEntry]) -> Result<Vec<Variant>, AugmentError> {
    let results: Vec<Result<Variant, AugmentError>> = entries
        .par_iter()
        .map(|entry| {
            apply_puzzle_transform(puzzle, &entry.transform)
                .map(|augmented| Variant { id: entry.id, puzzle: augmented })
                .map_err(|(location, source)| AugmentError::Transform {
                    id: entry.id,
                    name: entry.name,
                    location,
                    source,
                })
        })
        .collect();

    // Sequential collect so the lowest failing id is the one reported
    results.into_iter().collect()
}

/// Serialize variants to their on-disk JSON bytes.
pub fn encode_variants(variants: &[Variant]) -> Result<Vec<(u32, Vec<u8>)>, AugmentError> {
    variants
        .iter()
        .map(|v| {
            v.puzzle
                .to_json_bytes()
                .map(|bytes| (v.id, bytes))
                .map_err(|source| AugmentError::Encode { id: v.id, source })
        })
        .collect()
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> AugmentError + '_ {
    move |source| AugmentError::Write { path: path.to_path_buf(), source }
}

/// Commit encoded variants of puzzle `name` into `out_dir`.
///
/// Files are written into a staging directory first and renamed into place
/// one by one; the manifest is saved last. A crash at any point before the
/// manifest is written leaves the puzzle incomplete for the next run.
pub fn commit_variants(
    out_dir: &Path,
    name: &str,
    encoded: &[(u32, Vec<u8>)],
    mut manifest: PuzzleManifest,
) -> Result<Vec<PathBuf>, AugmentError> {
    let staging = staging_dir(out_dir, name);
    if staging.exists() {
        fs::remove_dir_all(&staging).map_err(write_error(&staging))?;
    }
    fs::create_dir_all(&staging).map_err(write_error(&staging))?;

    for (id, bytes) in encoded {
        let path = staging.join(variant_file_name(name, *id));
        fs::write(&path, bytes).map_err(write_error(&path))?;
    }

    let mut outputs = Vec::with_capacity(encoded.len());
    for (id, _) in encoded {
        let file_name = variant_file_name(name, *id);
        let dest = out_dir.join(&file_name);
        fs::rename(staging.join(&file_name), &dest).map_err(write_error(&dest))?;
        manifest.record(*id, file_name);
        outputs.push(dest);
    }

    let path = manifest_path(out_dir, name);
    manifest.save(&path).map_err(|source| AugmentError::Manifest { path: path.clone(), source })?;

    if let Err(e) = fs::remove_dir(&staging) {
        log::warn!("could not remove staging directory {}: {}", staging.display(), e);
    }

    Ok(outputs)
}

/// Load the previous manifest of a puzzle, treating unreadable ones as absent.
fn load_previous_manifest(out_dir: &Path, name: &str) -> Option<PuzzleManifest> {
    let path = manifest_path(out_dir, name);
    match PuzzleManifest::load(&path) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::warn!("ignoring manifest {}: {}", path.display(), e);
            None
        }
    }
}

/// Process one source puzzle: resume check, augment, and commit.
///
/// Per-puzzle failures are logged and reported in the returned result.
/// Only fatal (output) failures are returned as `Err`.
pub fn process_puzzle(ctx: &BuildContext, source: &PuzzleSource) -> Result<PuzzleResult, AugmentError> {
    let start = Instant::now();
    match augment_source(ctx, source, start) {
        Ok(result) => Ok(result),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            let id = e.transform_id().map(|id| format!(" (transform {})", id)).unwrap_or_default();
            log::error!(
                "{}/{}: {} error{}: {}",
                source.split,
                source.name,
                e.kind(),
                id,
                e
            );
            Ok(PuzzleResult::failed(
                source.name.clone(),
                source.split.clone(),
                e.kind(),
                e.to_string(),
                start.elapsed(),
            ))
        }
    }
}

fn augment_source(
    ctx: &BuildContext,
    source: &PuzzleSource,
    start: Instant,
) -> Result<PuzzleResult, AugmentError> {
    let out_dir = ctx.out_dir(&source.split);
    let all_ids: Vec<u32> = ctx.registry().ids().collect();
    let sentinel = ctx.resume_mode() == ResumeMode::Sentinel;

    if !ctx.is_force() && sentinel && out_dir.join(variant_file_name(&source.name, 0)).exists() {
        log::debug!("{}/{}: sentinel variant exists, skipping", source.split, source.name);
        return Ok(PuzzleResult::skipped(source.name.clone(), source.split.clone()));
    }

    let bytes = fs::read(&source.path)
        .map_err(|e| AugmentError::Read { path: source.path.clone(), source: e })?;
    let source_hash = hash_bytes(&bytes);

    let previous = if ctx.is_force() || sentinel {
        None
    } else {
        load_previous_manifest(&out_dir, &source.name)
    };

    let (required, manifest) = match previous {
        Some(mut manifest) => {
            let missing = manifest.missing_ids(&out_dir, &source_hash, &all_ids);
            if manifest.source_hash != source_hash {
                manifest = PuzzleManifest::new(ctx.catalog_version(), source_hash);
            } else {
                manifest.catalog_version = manifest.catalog_version.max(ctx.catalog_version());
            }
            (missing, manifest)
        }
        None => (all_ids, PuzzleManifest::new(ctx.catalog_version(), source_hash)),
    };

    if required.is_empty() {
        log::debug!("{}/{}: up to date, skipping", source.split, source.name);
        return Ok(PuzzleResult::skipped(source.name.clone(), source.split.clone()));
    }

    let puzzle = Puzzle::from_slice(&bytes)?;
    let variants = augment_ids(&puzzle, ctx.registry(), &required)?;
    let encoded = encode_variants(&variants)?;

    if ctx.is_dry_run() {
        log::info!(
            "{}/{}: would write {} variant(s)",
            source.split,
            source.name,
            required.len()
        );
        return Ok(PuzzleResult::planned(source.name.clone(), source.split.clone(), required));
    }

    let outputs = commit_variants(&out_dir, &source.name, &encoded, manifest)?;
    log::debug!(
        "{}/{}: committed {} variant(s) in {:?}",
        source.split,
        source.name,
        outputs.len(),
        start.elapsed()
    );

    Ok(PuzzleResult::success(
        source.name.clone(),
        source.split.clone(),
        required,
        outputs,
        start.elapsed(),
    ))
}

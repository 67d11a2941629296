//! Per-puzzle commit manifests.
//!
//! A manifest records which variant files of one puzzle were committed, for
//! which source content and catalog version. Manifests are the commit record
//! of a puzzle: variant files without a matching manifest are treated as
//! incomplete output and regenerated.
//!
//! # Manifest Format
//!
//! Stored as JSON at `<out_dir>/.manifest/<name>.json`:
//!
//! ```json
//! {
//!   "version": 1,
//!   "catalog_version": 2,
//!   "source_hash": "a1b2c3d4e5f60718",
//!   "files": {
//!     "0": "007bbfb7_00.json",
//!     "1": "007bbfb7_01.json"
//!   },
//!   "completed_at": "2026-01-15T10:30:00Z"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Current manifest format version.
const MANIFEST_VERSION: u32 = 1;

/// Directory (inside a split's output directory) holding manifests.
pub const MANIFEST_DIR: &str = ".manifest";

/// Directory (inside a split's output directory) used to stage variant files.
pub const STAGING_DIR: &str = ".staging";

/// Error during manifest operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Version mismatch
    #[error("Manifest version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Commit record for one puzzle's variant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleManifest {
    /// Manifest format version
    pub version: u32,
    /// Catalog version the variants were generated with
    pub catalog_version: u32,
    /// Hash of the source file content
    pub source_hash: String,
    /// Committed transform ids and their file names
    pub files: BTreeMap<u32, String>,
    /// When the variant set was last committed
    pub completed_at: String,
}

impl PuzzleManifest {
    /// Create a manifest with no committed files.
    pub fn new(catalog_version: u32, source_hash: String) -> Self {
        Self {
            version: MANIFEST_VERSION,
            catalog_version,
            source_hash,
            files: BTreeMap::new(),
            completed_at: format_timestamp(SystemTime::now()),
        }
    }

    /// Load a manifest from a file.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ManifestError> {
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(path)?;
        let manifest: PuzzleManifest = serde_json::from_reader(BufReader::new(file))?;

        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::VersionMismatch {
                expected: MANIFEST_VERSION,
                found: manifest.version,
            });
        }

        Ok(Some(manifest))
    }

    /// Save the manifest atomically.
    ///
    /// The content is written to a sibling temp file and renamed over `path`,
    /// so readers see either the old manifest or the new one.
    pub fn save(&mut self, path: &Path) -> Result<(), ManifestError> {
        self.completed_at = format_timestamp(SystemTime::now());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            serde_json::to_writer_pretty(&mut file, self)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Record a committed variant file.
    pub fn record(&mut self, id: u32, file_name: String) {
        self.files.insert(id, file_name);
    }

    /// Ids that must be (re)generated for the puzzle to be complete.
    ///
    /// Every id is missing when the source content changed. Otherwise an id
    /// is missing when it was never committed or its file is gone.
    pub fn missing_ids(&self, out_dir: &Path, source_hash: &str, ids: &[u32]) -> Vec<u32> {
        if self.source_hash != source_hash {
            return ids.to_vec();
        }
        ids.iter()
            .copied()
            .filter(|id| match self.files.get(id) {
                Some(file) => !out_dir.join(file).is_file(),
                None => true,
            })
            .collect()
    }

    /// Get the number of committed files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no file has been committed.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Path of the manifest for puzzle `name` in a split's output directory.
pub fn manifest_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(MANIFEST_DIR).join(format!("{}.json", name))
}

/// Path of the staging directory for puzzle `name`.
pub fn staging_dir(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(STAGING_DIR).join(name)
}

/// Hash file content for change detection.
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", fnv1a_hash(data))
}

/// FNV-1a hash algorithm.
fn fnv1a_hash(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    data.iter().fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME))
}

/// Format a SystemTime as an ISO 8601 UTC timestamp string.
fn format_timestamp(time: SystemTime) -> String {
    let secs = time.duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default().as_secs();

    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let remaining = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        remaining / 3600,
        (remaining % 3600) / 60,
        remaining % 60
    )
}

/// Convert days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

//! Configuration schema types for `arcaug.toml`
//!
//! Defines the structure and validation rules for an augmentation project.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::registry::LATEST_CATALOG_VERSION;

/// How the engine decides that a puzzle needs no work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResumeMode {
    /// Skip when the commit manifest matches the source and every file exists
    #[default]
    Manifest,
    /// Skip when `<name>_00.json` exists, regardless of the other ids
    Sentinel,
}

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required)
    pub name: String,
}

/// Where puzzles are read from and variants written to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Puzzles live at `<source>/<split>/<name>.json`
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Variants land at `<out>/<split>/<name>_<id>.json`
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { source: default_source(), out: default_out() }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("ARC-AGI-2/data")
}

fn default_out() -> PathBuf {
    PathBuf::from("data")
}

/// Augmentation run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Dataset partitions to process, in order
    #[serde(default = "default_splits")]
    pub splits: Vec<String>,
    /// Catalog version whose transforms are applied
    #[serde(default = "default_catalog_version")]
    pub catalog_version: u32,
    /// Worker threads across puzzles (0 = available parallelism)
    #[serde(default)]
    pub jobs: usize,
    /// Completion check used to skip finished puzzles
    #[serde(default)]
    pub resume: ResumeMode,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            splits: default_splits(),
            catalog_version: default_catalog_version(),
            jobs: 0,
            resume: ResumeMode::default(),
        }
    }
}

fn default_splits() -> Vec<String> {
    vec!["training".to_string(), "evaluation".to_string()]
}

fn default_catalog_version() -> u32 {
    LATEST_CATALOG_VERSION
}

impl AugmentConfig {
    /// Number of worker threads to use, resolving 0 to the machine's parallelism.
    pub fn effective_jobs(&self) -> usize {
        if self.jobs > 0 {
            return self.jobs;
        }
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }
}

/// Root configuration loaded from `arcaug.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcaugConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub augment: AugmentConfig,
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "augment.splits")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arcaug.toml: '{}' {}", self.field, self.message)
    }
}

/// A split name must be exactly one normal path component.
fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

impl ArcaugConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.name.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "project.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.augment.splits.is_empty() {
            errors.push(ConfigValidationError {
                field: "augment.splits".to_string(),
                message: "must list at least one split".to_string(),
            });
        }

        for split in &self.augment.splits {
            if !is_plain_component(split) {
                errors.push(ConfigValidationError {
                    field: "augment.splits".to_string(),
                    message: format!("'{}' is not a plain directory name", split),
                });
            }
        }

        let version = self.augment.catalog_version;
        if version == 0 || version > LATEST_CATALOG_VERSION {
            errors.push(ConfigValidationError {
                field: "augment.catalog_version".to_string(),
                message: format!("must be between 1 and {}", LATEST_CATALOG_VERSION),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

//! Build context containing configuration and state for an augmentation run.

use crate::config::{ArcaugConfig, ResumeMode};
use crate::registry::{RegistryError, TransformRegistry};
use std::path::{Path, PathBuf};

/// Build context containing configuration and paths for a run.
///
/// The context provides everything a run needs: the configuration, the
/// project root that relative paths resolve against, and the transform
/// registry selected by the configured catalog version.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// The loaded configuration
    config: ArcaugConfig,
    /// Project root directory (where arcaug.toml is located)
    project_root: PathBuf,
    /// Transforms applied to every puzzle
    registry: TransformRegistry,
    /// Regenerate every puzzle regardless of prior output
    force: bool,
    /// Plan only; read sources but write nothing
    dry_run: bool,
}

impl BuildContext {
    /// Create a new build context.
    ///
    /// Fails if the configured catalog version is unknown.
    pub fn new(config: ArcaugConfig, project_root: PathBuf) -> Result<Self, RegistryError> {
        let registry = TransformRegistry::for_version(config.augment.catalog_version)?;
        Ok(Self::with_registry(config, project_root, registry))
    }

    /// Create a context that applies a caller-supplied registry.
    pub fn with_registry(
        config: ArcaugConfig,
        project_root: PathBuf,
        registry: TransformRegistry,
    ) -> Self {
        Self { config, project_root, registry, force: false, dry_run: false }
    }

    /// Get the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the transform registry.
    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Splits to process, in configured order.
    pub fn splits(&self) -> &[String] {
        &self.config.augment.splits
    }

    /// Directory holding the source puzzles of `split`.
    pub fn source_dir(&self, split: &str) -> PathBuf {
        self.resolve_path(&self.config.paths.source).join(split)
    }

    /// Directory receiving the variants of `split`.
    pub fn out_dir(&self, split: &str) -> PathBuf {
        self.resolve_path(&self.config.paths.out).join(split)
    }

    pub fn resume_mode(&self) -> ResumeMode {
        self.config.augment.resume
    }

    /// Catalog version recorded in manifests.
    pub fn catalog_version(&self) -> u32 {
        self.config.augment.catalog_version
    }

    /// Number of worker threads across puzzles.
    pub fn jobs(&self) -> usize {
        self.config.augment.effective_jobs()
    }

    pub fn is_force(&self) -> bool {
        self.force
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Set force mode.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve a path relative to the project root.
    ///
    /// If the path is absolute, returns it unchanged.
    /// If relative, joins it with the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        crate::config::resolve_path(&self.project_root, path)
    }
}

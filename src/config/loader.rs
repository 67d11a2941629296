//! Configuration loading and discovery for `arcaug.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ArcaugConfig, AugmentConfig, PathsConfig, ProjectConfig, ResumeMode};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "arcaug.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse arcaug.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override source directory
    pub src: Option<PathBuf>,
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Replace the split list
    pub splits: Option<Vec<String>>,
    /// Override catalog version
    pub catalog_version: Option<u32>,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
    /// Override resume mode
    pub resume: Option<ResumeMode>,
}

/// A loaded configuration together with the directory its relative paths
/// are resolved against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ArcaugConfig,
    /// Directory holding the config file, or the working directory
    pub root: PathBuf,
    /// The file the config came from, if any
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Absolute (or root-relative) source directory
    pub fn source_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.paths.source)
    }

    /// Absolute (or root-relative) output directory
    pub fn out_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.paths.out)
    }
}

/// Find arcaug.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find arcaug.toml by walking up from a specific directory.
///
/// This is the internal implementation that allows specifying the start directory,
/// useful for testing.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an arcaug.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns a default
/// configuration rooted at the working directory.
///
/// # Example
/// ```ignore
/// let loaded = load_config(None)?;
/// println!("writing to {}", loaded.out_dir().display());
/// ```
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let config = load_config_file(&p)?;
            let root = match project_root(&p) {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => env::current_dir()?,
            };
            Ok(LoadedConfig { config, root, path: Some(p) })
        }
        None => {
            Ok(LoadedConfig { config: default_config(), root: env::current_dir()?, path: None })
        }
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<ArcaugConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ArcaugConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

/// Run validation, folding every problem into one error.
pub fn check(config: &ArcaugConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Create a default configuration when no arcaug.toml is found.
///
/// The project name is taken from the current directory name.
pub fn default_config() -> ArcaugConfig {
    let project_name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string());

    ArcaugConfig {
        project: ProjectConfig { name: project_name },
        paths: PathsConfig::default(),
        augment: AugmentConfig::default(),
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The merged
/// configuration should be re-validated with [`check`].
pub fn merge_cli_overrides(config: &mut ArcaugConfig, overrides: &CliOverrides) {
    if let Some(ref src) = overrides.src {
        config.paths.source = src.clone();
    }
    if let Some(ref out) = overrides.out {
        config.paths.out = out.clone();
    }
    if let Some(ref splits) = overrides.splits {
        config.augment.splits = splits.clone();
    }
    if let Some(version) = overrides.catalog_version {
        config.augment.catalog_version = version;
    }
    if let Some(jobs) = overrides.jobs {
        config.augment.jobs = jobs;
    }
    if let Some(resume) = overrides.resume {
        config.augment.resume = resume;
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

//! Configuration module for augmentation runs
//!
//! Provides types and parsing for `arcaug.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::{
    check, default_config, find_config, find_config_from, load_config, load_config_file,
    merge_cli_overrides, project_root, resolve_path, CliOverrides, ConfigError, LoadedConfig,
    CONFIG_FILE_NAME,
};
pub use schema::*;

//! Augmentation engine for arcaug
//!
//! Turns each source puzzle into one variant file per registered transform.
//!
//! # Overview
//!
//! A run consists of:
//! - **Discovery**: Find `*.json` puzzles in each split's source directory
//! - **Resume check**: Skip puzzles whose variant set is already committed
//! - **Augmentation**: Apply every required transform in memory
//! - **Commit**: Stage, move into place, and record a manifest
//!
//! # Example
//!
//! ```ignore
//! use arcaug::build::{run_augmentation, BuildContext};
//! use arcaug::config::load_config;
//!
//! let loaded = load_config(None)?;
//! let context = BuildContext::new(loaded.config, loaded.root)?;
//! let result = run_augmentation(context)?;
//! println!("{}", result.summary());
//! ```

pub mod context;
pub mod discovery;
pub mod manifest;
pub mod parallel;
pub mod pipeline;
pub mod result;

pub use context::*;
pub use discovery::*;
pub use manifest::*;
pub use parallel::*;
pub use pipeline::*;
pub use result::*;

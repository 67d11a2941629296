//! arcaug - Deterministic augmentation for ARC-style grid puzzles
//!
//! This library provides functionality to:
//! - Load puzzles (`train`/`test` pairs of integer grids) from JSON
//! - Apply geometric, scaling and palette transforms to whole puzzles
//! - Enumerate a versioned, append-only catalog of transforms by id
//! - Materialize one `<name>_<id>.json` variant per transform, resumably
//! - Summarize and flatten puzzle directories

pub mod build;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod models;
pub mod registry;
pub mod stats;
pub mod transforms;

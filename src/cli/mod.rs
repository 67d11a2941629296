//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod augment;
mod catalog;
mod dataset;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// arcaug - Materialize augmented variants of grid puzzles
#[derive(Parser)]
#[command(name = "arcaug")]
#[command(about = "arcaug - Apply a fixed catalog of grid transforms to ARC-style puzzles")]
#[command(version)]
pub struct Cli {
    /// Show debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one variant file per transform for every source puzzle
    Augment {
        /// Path to arcaug.toml (default: search upward from the working directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Source root; puzzles are read from <src>/<split>/*.json
        #[arg(long)]
        src: Option<PathBuf>,

        /// Output root; variants are written to <out>/<split>/
        #[arg(long)]
        out: Option<PathBuf>,

        /// Split to process (repeatable; replaces the configured list)
        #[arg(long = "split")]
        splits: Vec<String>,

        /// Catalog version to apply
        #[arg(long)]
        catalog_version: Option<u32>,

        /// Number of parallel workers (0 = available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Completion check: manifest or sentinel
        #[arg(long)]
        resume: Option<crate::config::ResumeMode>,

        /// Regenerate every puzzle, ignoring prior output
        #[arg(long)]
        force: bool,

        /// Report what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List the transform catalog
    Catalog {
        /// Catalog version to list (default: latest)
        #[arg(long)]
        catalog_version: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the puzzles of a directory
    Stats {
        /// Directory of puzzle files
        dir: PathBuf,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flatten a directory of puzzles into one JSON array of records
    Flatten {
        /// Directory of puzzle files
        dir: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Install the logger: `info` by default, `debug` with --verbose.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Augment {
            config,
            src,
            out,
            splits,
            catalog_version,
            jobs,
            resume,
            force,
            dry_run,
        } => augment::run_augment(augment::AugmentArgs {
            config,
            src,
            out,
            splits,
            catalog_version,
            jobs,
            resume,
            force,
            dry_run,
        }),
        Commands::Catalog { catalog_version, json } => catalog::run_catalog(catalog_version, json),
        Commands::Stats { dir, output } => dataset::run_stats(&dir, output.as_deref()),
        Commands::Flatten { dir, output } => dataset::run_flatten(&dir, &output),
    }
}

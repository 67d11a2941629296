//! Augment command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::build::{BuildContext, ParallelRun};
use crate::config::{check, load_config, merge_cli_overrides, CliOverrides, ResumeMode};

/// Arguments of `arcaug augment`.
#[derive(Debug, Default)]
pub struct AugmentArgs {
    pub config: Option<PathBuf>,
    pub src: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub splits: Vec<String>,
    pub catalog_version: Option<u32>,
    pub jobs: Option<usize>,
    pub resume: Option<ResumeMode>,
    pub force: bool,
    pub dry_run: bool,
}

/// Paths given on the command line are relative to the working directory,
/// not to the config file.
fn from_cwd(path: Option<PathBuf>, cwd: &Path) -> Option<PathBuf> {
    path.map(|p| crate::config::resolve_path(cwd, &p))
}

/// Run the augment command
pub fn run_augment(args: AugmentArgs) -> ExitCode {
    let mut loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match &loaded.path {
        Some(path) => log::debug!("using config {}", path.display()),
        None => log::debug!("no arcaug.toml found, using defaults"),
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| loaded.root.clone());
    let overrides = CliOverrides {
        src: from_cwd(args.src, &cwd),
        out: from_cwd(args.out, &cwd),
        splits: (!args.splits.is_empty()).then_some(args.splits),
        catalog_version: args.catalog_version,
        jobs: args.jobs,
        resume: args.resume,
    };
    merge_cli_overrides(&mut loaded.config, &overrides);

    if let Err(e) = check(&loaded.config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let source_dir = loaded.source_dir();
    let out_dir = loaded.out_dir();
    let context = match BuildContext::new(loaded.config, loaded.root) {
        Ok(ctx) => ctx.with_force(args.force).with_dry_run(args.dry_run),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    log::info!(
        "augmenting {} -> {} (catalog v{}, {} transforms{})",
        source_dir.display(),
        out_dir.display(),
        context.catalog_version(),
        context.registry().len(),
        if args.force { ", forced" } else { "" }
    );

    match ParallelRun::new(context).run() {
        Ok(result) => {
            if result.is_success() {
                println!("{}", result.summary());
                ExitCode::from(EXIT_SUCCESS)
            } else {
                eprintln!("{}", result.summary());
                ExitCode::from(EXIT_ERROR)
            }
        }
        Err(e) => {
            log::error!("run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

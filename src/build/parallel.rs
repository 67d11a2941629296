//! Parallel augmentation across puzzles.
//!
//! # How It Works
//!
//! 1. Discover the source puzzles of each configured split
//! 2. Create the split's output directory
//! 3. Hand puzzles to a fixed pool of scoped worker threads; each worker owns
//!    the whole commit of the puzzle it takes, so no locking is needed
//! 4. Report results in discovery order
//!
//! A fatal error stops workers from taking new puzzles and is returned once
//! the in-flight puzzles finish.
//!
//! # Example
//!
//! ```ignore
//! use arcaug::build::{BuildContext, ParallelRun};
//!
//! let context = BuildContext::new(config, project_root)?;
//! let result = ParallelRun::new(context).with_jobs(4).run()?;
//! println!("{}", result.summary());
//! ```

use crate::build::{
    discover_split, process_puzzle, AugmentError, BuildContext, DiscoveryError, PuzzleResult,
    PuzzleSource, RunResult,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

/// Error that aborts a whole run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RunError {
    /// A split's sources could not be listed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// A split's output directory could not be created
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir { path: PathBuf, source: std::io::Error },
    /// Writing the outputs of a puzzle failed
    #[error("{split}/{name}: {source}")]
    Fatal { split: String, name: String, source: AugmentError },
}

/// Parallel augmentation executor.
pub struct ParallelRun {
    /// Build context
    context: BuildContext,
    /// Number of parallel jobs
    jobs: usize,
}

impl ParallelRun {
    /// Create a new run using the context's configured job count.
    pub fn new(context: BuildContext) -> Self {
        let jobs = context.jobs();
        Self { context, jobs }
    }

    /// Set the number of parallel jobs.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Get the number of parallel jobs.
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run every configured split in order.
    pub fn run(&self) -> Result<RunResult, RunError> {
        let start = Instant::now();
        let mut result = RunResult::new();

        for split in self.context.splits() {
            let sources = discover_split(&self.context, split)?;
            log::info!(
                "{}: {} puzzle(s), {} transform(s), {} worker(s)",
                split,
                sources.len(),
                self.context.registry().len(),
                self.jobs.min(sources.len().max(1))
            );

            if !self.context.is_dry_run() {
                let out_dir = self.context.out_dir(split);
                std::fs::create_dir_all(&out_dir)
                    .map_err(|source| RunError::OutputDir { path: out_dir, source })?;
            }

            for puzzle in self.run_sources(&sources)? {
                result.add_result(puzzle);
            }
        }

        Ok(result.with_duration(start.elapsed()))
    }

    /// Process a list of puzzles, returning results in input order.
    pub fn run_sources(&self, sources: &[PuzzleSource]) -> Result<Vec<PuzzleResult>, RunError> {
        if sources.is_empty() {
            return Ok(vec![]);
        }

        if self.jobs == 1 || sources.len() == 1 {
            return sources.iter().map(|s| self.process(s)).collect();
        }

        let stop = AtomicBool::new(false);
        let next_idx = AtomicUsize::new(0);
        let context = &self.context;

        let worker_outputs = std::thread::scope(|s| {
            let handles: Vec<_> = (0..self.jobs.min(sources.len()))
                .map(|_| {
                    let stop = &stop;
                    let next_idx = &next_idx;
                    s.spawn(move || {
                        let mut done = Vec::new();
                        let mut fatal = None;
                        while !stop.load(Ordering::SeqCst) {
                            let idx = next_idx.fetch_add(1, Ordering::SeqCst);
                            let Some(source) = sources.get(idx) else { break };

                            match process_puzzle(context, source) {
                                Ok(result) => done.push((idx, result)),
                                Err(e) => {
                                    stop.store(true, Ordering::SeqCst);
                                    fatal = Some((idx, fatal_error(source, e)));
                                    break;
                                }
                            }
                        }
                        (done, fatal)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Vec<_>>()
        });

        let mut results = Vec::with_capacity(sources.len());
        let mut first_fatal: Option<(usize, RunError)> = None;
        for (done, fatal) in worker_outputs {
            results.extend(done);
            if let Some((idx, err)) = fatal {
                if first_fatal.as_ref().map_or(true, |(first, _)| idx < *first) {
                    first_fatal = Some((idx, err));
                }
            }
        }

        if let Some((_, err)) = first_fatal {
            return Err(err);
        }

        // Sort results by original index to maintain deterministic order
        results.sort_by_key(|(idx, _)| *idx);
        Ok(results.into_iter().map(|(_, r)| r).collect())
    }

    fn process(&self, source: &PuzzleSource) -> Result<PuzzleResult, RunError> {
        process_puzzle(&self.context, source).map_err(|e| fatal_error(source, e))
    }
}

fn fatal_error(source: &PuzzleSource, err: AugmentError) -> RunError {
    RunError::Fatal { split: source.split.clone(), name: source.name.clone(), source: err }
}

/// Run an augmentation with the context's settings.
pub fn run_augmentation(context: BuildContext) -> Result<RunResult, RunError> {
    ParallelRun::new(context).run()
}

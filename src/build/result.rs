//! Run result types.
//!
//! Contains types for representing the outcome of an augmentation run.

use std::path::PathBuf;
use std::time::Duration;

use super::pipeline::ErrorKind;

/// Status of a single puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleStatus {
    /// Variants were generated and committed
    Success,
    /// Already complete, nothing to do
    Skipped,
    /// Would be generated (dry run)
    Planned,
    /// The puzzle was rejected; nothing was written for it
    Failed { kind: ErrorKind, message: String },
}

impl PuzzleStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, PuzzleStatus::Failed { .. })
    }
}

impl std::fmt::Display for PuzzleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleStatus::Success => write!(f, "success"),
            PuzzleStatus::Skipped => write!(f, "skipped"),
            PuzzleStatus::Planned => write!(f, "planned"),
            PuzzleStatus::Failed { kind, message } => write!(f, "failed ({}): {}", kind, message),
        }
    }
}

/// Result of processing a single puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleResult {
    /// Puzzle name (source file stem)
    pub name: String,
    /// Split the puzzle belongs to
    pub split: String,
    pub status: PuzzleStatus,
    /// Transform ids generated (or planned) in this run
    pub generated: Vec<u32>,
    /// Variant files committed in this run
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
}

impl PuzzleResult {
    /// Create a successful result.
    pub fn success(
        name: String,
        split: String,
        generated: Vec<u32>,
        outputs: Vec<PathBuf>,
        duration: Duration,
    ) -> Self {
        Self { name, split, status: PuzzleStatus::Success, generated, outputs, duration }
    }

    /// Create a skipped result.
    pub fn skipped(name: String, split: String) -> Self {
        Self {
            name,
            split,
            status: PuzzleStatus::Skipped,
            generated: vec![],
            outputs: vec![],
            duration: Duration::ZERO,
        }
    }

    /// Create a dry-run result listing the ids that would be generated.
    pub fn planned(name: String, split: String, generated: Vec<u32>) -> Self {
        Self {
            name,
            split,
            status: PuzzleStatus::Planned,
            generated,
            outputs: vec![],
            duration: Duration::ZERO,
        }
    }

    /// Create a failed result.
    pub fn failed(
        name: String,
        split: String,
        kind: ErrorKind,
        message: String,
        duration: Duration,
    ) -> Self {
        Self {
            name,
            split,
            status: PuzzleStatus::Failed { kind, message },
            generated: vec![],
            outputs: vec![],
            duration,
        }
    }

    /// Check if this result is successful.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `split/name`, used in reports.
    pub fn label(&self) -> String {
        format!("{}/{}", self.split, self.name)
    }
}

/// Result of a complete run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Results for each puzzle, in discovery order
    pub puzzles: Vec<PuzzleResult>,
    /// Total run duration
    pub total_duration: Duration,
}

impl RunResult {
    /// Create a new empty run result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a puzzle result.
    pub fn add_result(&mut self, result: PuzzleResult) {
        self.puzzles.push(result);
    }

    /// Set the total duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    fn count(&self, pred: impl Fn(&PuzzleStatus) -> bool) -> usize {
        self.puzzles.iter().filter(|r| pred(&r.status)).count()
    }

    /// Get the number of puzzles whose variants were committed.
    pub fn success_count(&self) -> usize {
        self.count(|s| matches!(s, PuzzleStatus::Success))
    }

    /// Get the number of puzzles that were already complete.
    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, PuzzleStatus::Skipped))
    }

    /// Get the number of puzzles a dry run would process.
    pub fn planned_count(&self) -> usize {
        self.count(|s| matches!(s, PuzzleStatus::Planned))
    }

    /// Get the number of failed puzzles.
    pub fn failed_count(&self) -> usize {
        self.count(PuzzleStatus::is_failure)
    }

    /// Check if the overall run succeeded (no failures).
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Number of variant files written.
    pub fn files_written(&self) -> usize {
        self.puzzles.iter().map(|r| r.outputs.len()).sum()
    }

    /// Get failed puzzle results.
    pub fn failures(&self) -> Vec<&PuzzleResult> {
        self.puzzles.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// Format a summary of the run.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        let success = self.success_count();
        let skipped = self.skipped_count();
        let planned = self.planned_count();
        let failed = self.failed_count();
        let total = self.puzzles.len();

        if planned > 0 {
            lines.push(format!(
                "Dry run: {} to augment, {} up to date ({} total)",
                planned, skipped, total
            ));
        }

        if failed > 0 {
            lines.push(format!(
                "Augmentation finished with failures: {} augmented, {} skipped, {} failed ({} total)",
                success, skipped, failed, total
            ));
            for puzzle in self.failures() {
                lines.push(format!("  - {}: {}", puzzle.label(), puzzle.status));
            }
        } else if planned == 0 {
            lines.push(format!(
                "Augmentation succeeded: {} augmented ({} files), {} skipped ({} total) in {:?}",
                success,
                self.files_written(),
                skipped,
                total,
                self.total_duration
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn test_puzzle_status_display() {
        assert_eq!(PuzzleStatus::Success.to_string(), "success");
        assert_eq!(PuzzleStatus::Skipped.to_string(), "skipped");
        assert_eq!(
            PuzzleStatus::Failed { kind: ErrorKind::Format, message: s("missing field `test`") }
                .to_string(),
            "failed (format): missing field `test`"
        );
    }

    #[test]
    fn test_puzzle_status_is_success() {
        assert!(PuzzleStatus::Success.is_success());
        assert!(PuzzleStatus::Skipped.is_success());
        assert!(PuzzleStatus::Planned.is_success());
        assert!(!PuzzleStatus::Failed { kind: ErrorKind::Shape, message: s("x") }.is_success());
    }

    #[test]
    fn test_run_result_counts() {
        let mut result = RunResult::new();
        result.add_result(PuzzleResult::success(
            s("a"),
            s("training"),
            vec![0, 1],
            vec![PathBuf::from("a_00.json"), PathBuf::from("a_01.json")],
            Duration::ZERO,
        ));
        result.add_result(PuzzleResult::skipped(s("b"), s("training")));
        result.add_result(PuzzleResult::failed(
            s("c"),
            s("evaluation"),
            ErrorKind::Domain,
            s("cell (0, 0) has value 12"),
            Duration::ZERO,
        ));

        assert_eq!(result.success_count(), 1);
        assert_eq!(result.skipped_count(), 1);
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.files_written(), 2);
        assert!(!result.is_success());
        assert_eq!(result.failures()[0].label(), "evaluation/c");
    }

    #[test]
    fn test_run_result_summary_success() {
        let mut result = RunResult::new();
        result.add_result(PuzzleResult::success(
            s("a"),
            s("training"),
            vec![0],
            vec![PathBuf::from("a_00.json")],
            Duration::from_millis(5),
        ));
        let summary = result.with_duration(Duration::from_millis(5)).summary();
        assert!(summary.contains("Augmentation succeeded"));
        assert!(summary.contains("1 augmented (1 files)"));
    }

    #[test]
    fn test_run_result_summary_failure_lists_puzzles() {
        let mut result = RunResult::new();
        result.add_result(PuzzleResult::failed(
            s("bad"),
            s("training"),
            ErrorKind::Format,
            s("missing field `test`"),
            Duration::ZERO,
        ));
        let summary = result.summary();
        assert!(summary.contains("1 failed"));
        assert!(summary.contains("training/bad: failed (format)"));
    }

    #[test]
    fn test_run_result_summary_dry_run() {
        let mut result = RunResult::new();
        result.add_result(PuzzleResult::planned(s("a"), s("training"), vec![0, 1, 2]));
        result.add_result(PuzzleResult::skipped(s("b"), s("training")));
        assert!(result.is_success());
        assert_eq!(result.summary(), "Dry run: 1 to augment, 1 up to date (2 total)");
    }
}

//! Dataset command implementations (stats, flatten)

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Run the stats command
pub fn run_stats(dir: &Path, output: Option<&Path>) -> ExitCode {
    let stats = match crate::stats::collect_stats(dir) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let json = match serde_json::to_string_pretty(&stats) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, json + "\n") {
                eprintln!("Error writing {}: {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!(
                "Wrote statistics for {} puzzles to {}",
                stats.counts.total(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    if !stats.skipped.is_empty() {
        eprintln!("Skipped {} invalid file(s)", stats.skipped.len());
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Run the flatten command
pub fn run_flatten(dir: &Path, output: &Path) -> ExitCode {
    use crate::dataset::{flatten_dir, write_records};

    let records = match flatten_dir(dir) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match write_records(&records, output) {
        Ok(()) => {
            println!("Wrote {} records to {}", records.len(), output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

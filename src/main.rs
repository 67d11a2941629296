//! arcaug - Command-line tool for augmenting ARC-style grid puzzles

use std::process::ExitCode;

use arcaug::cli;

fn main() -> ExitCode {
    cli::run()
}

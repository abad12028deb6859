//! CLI argument parsing for gauntlet.
//!
//! Uses clap derive macros for declarative argument definitions. Running
//! with no arguments executes the full matrix under fail-fast; flags only
//! adjust the policy, output shape, or definition source.

use clap::Parser;
use std::path::PathBuf;

/// Gauntlet: run a validation matrix over a feature-flagged project.
///
/// A matrix crosses build configurations (default, all-features,
/// no-default-features) with check stages (format, lint, build, test, doc)
/// and runs the resulting tasks strictly in declared order, stopping at
/// the first failure unless told to collect them all.
#[derive(Parser, Debug)]
#[command(name = "gauntlet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run every task even after a failure and report all failures at the
    /// end, instead of halting at the first one.
    #[arg(long)]
    pub fail_collect: bool,

    /// Print the expanded task list (stage × configuration, in execution
    /// order) without running anything.
    #[arg(long)]
    pub list: bool,

    /// Emit a machine-readable JSON report on stdout instead of the
    /// human-readable one.
    #[arg(long)]
    pub json: bool,

    /// Path to a matrix definition file. Defaults to `gauntlet.yaml` in
    /// the working directory when present, else the built-in matrix.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to run the checks in. Defaults to the current directory.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments, exiting on `--help`/`--version`.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

//! Command execution for gauntlet.
//!
//! There is one real operation — load, expand, run, report — plus the
//! `--list` dry run. Both return the process exit code; only definition
//! problems surface as errors.

use crate::cli::Cli;
use crate::config::load_matrix;
use crate::error::Result;
use crate::exec::SystemExecutor;
use crate::exit_codes;
use crate::matrix::expand;
use crate::report::{render_json, render_report, render_task_list, report_exit_code};
use crate::runner::{Policy, Runner};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

/// Execute the CLI invocation and return the process exit code.
pub fn dispatch(cli: Cli, interrupt: &AtomicBool) -> Result<i32> {
    let working_dir = cli
        .dir
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let matrix = load_matrix(cli.config.as_deref(), &working_dir)?;
    let tasks = expand(&matrix);

    if cli.list {
        print!("{}", render_task_list(&tasks));
        return Ok(exit_codes::SUCCESS);
    }

    let policy = if cli.fail_collect {
        Policy::FailCollect
    } else {
        Policy::FailFast
    };

    let executor = SystemExecutor;
    let runner = Runner::new(&executor, policy, &working_dir, interrupt);

    // Progress goes to stderr so a piped `--json` stdout stays clean.
    let report = runner.run_with_progress(&tasks, |task| {
        eprintln!("running {} [{}]", task.label(), task.ordinal + 1);
    });

    if cli.json {
        println!("{}", render_json(&tasks, &report));
    } else {
        print!("{}", render_report(&tasks, &report));
    }

    Ok(report_exit_code(&report))
}

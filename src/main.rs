//! Gauntlet: sequential validation-matrix runner.
//!
//! This is the main entry point for the `gauntlet` CLI. It parses
//! arguments, installs the interrupt flag, dispatches the run, and maps
//! the result to a process exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod matrix;
pub mod report;
pub mod runner;

use cli::Cli;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Ctrl-C sets the flag; the in-flight external command receives the
    // signal itself and dies, and the runner stops at the next check.
    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupt);
        if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            eprintln!("warning: could not install interrupt handler: {}", err);
        }
    }

    match commands::dispatch(cli, &interrupt) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

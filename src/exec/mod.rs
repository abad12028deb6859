//! External command execution.
//!
//! The runner treats every check tool (linter, formatter, compiler, test
//! runner, doc generator) as an opaque process behind [`Executor`]: argv in,
//! exit code and captured output out. Nothing in gauntlet parses tool
//! output; only exit codes drive the run.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// Sentinel exit code for a command that could not be spawned at all, or
/// was killed by a signal before producing an exit code. Treated like any
/// other nonzero exit by the runner's policy.
pub const SPAWN_FAILURE: i32 = -1;

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration_ms: u64,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The uniform contract for running one external command to completion.
///
/// A trait seam so the runner's policy behavior can be tested against
/// scripted outcomes without spawning processes.
pub trait Executor {
    /// Run `argv` in `dir`, blocking until the process exits. The child
    /// inherits the environment. Never fails: spawn errors come back as an
    /// [`ExecOutput`] with the [`SPAWN_FAILURE`] sentinel and the OS error
    /// text in stderr.
    fn execute(&self, argv: &[String], dir: &Path) -> ExecOutput;
}

/// Production executor backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&self, argv: &[String], dir: &Path) -> ExecOutput {
        let start = Instant::now();

        let Some(program) = argv.first() else {
            return ExecOutput {
                exit_code: SPAWN_FAILURE,
                stdout: Vec::new(),
                stderr: b"empty command".to_vec(),
                duration_ms: 0,
            };
        };
        let output = Command::new(program)
            .args(&argv[1..])
            .current_dir(dir)
            .output();

        let duration_ms = start.elapsed().as_millis() as u64;

        match output {
            Ok(output) => ExecOutput {
                // A None code means the child was killed by a signal.
                exit_code: output.status.code().unwrap_or(SPAWN_FAILURE),
                stdout: output.stdout,
                stderr: output.stderr,
                duration_ms,
            },
            Err(err) => ExecOutput {
                exit_code: SPAWN_FAILURE,
                stdout: Vec::new(),
                stderr: format!("failed to execute '{}': {}", program, err).into_bytes(),
                duration_ms,
            },
        }
    }
}

//! Sequential task execution against the fail policy.
//!
//! The runner consumes the expanded task list strictly in ordinal order,
//! one blocking external process at a time. There is no reordering and no
//! parallelism: later stages (tests) are meaningless if an earlier stage
//! (build) failed, so the declared order is the correctness contract.
//!
//! Tasks are not isolated from one another. Build caches and other
//! filesystem state deliberately carry across tasks; each external command
//! is responsible for its own incremental state.


use crate::exec::Executor;
use crate::matrix::Task;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// What to do when a task fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Halt the run at the first failing task, leaving the rest un-run.
    #[default]
    FailFast,
    /// Run every task regardless of failures and report them all.
    FailCollect,
}

/// The sealed result of one finished task. Immutable after creation.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub task: Task,
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration_ms: u64,
}

impl TaskOutcome {
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Everything that happened during one run, sealed when the runner
/// returns and handed to the reporter as-is.
#[derive(Debug)]
pub struct RunReport {
    /// Outcomes in execution order. Under fail-fast this may be shorter
    /// than the task list; the missing tail was never run.
    pub outcomes: Vec<TaskOutcome>,
    /// True when fail-fast stopped the run at a failing task.
    pub halted_early: bool,
    /// True when an interrupt signal ended the run. Distinct from
    /// `halted_early`: an aborted run has no verdict, only an abort.
    pub aborted: bool,
    /// Total number of tasks the expanded matrix contained.
    pub total_tasks: usize,
    pub started_at: DateTime<Utc>,
}

impl RunReport {
    /// The first outcome with a nonzero exit code, if any.
    pub fn first_failure(&self) -> Option<&TaskOutcome> {
        self.outcomes.iter().find(|outcome| !outcome.passed())
    }

    /// Full success: the run completed, every task ran, and every task
    /// exited zero.
    pub fn succeeded(&self) -> bool {
        !self.aborted
            && !self.halted_early
            && self.outcomes.len() == self.total_tasks
            && self.first_failure().is_none()
    }
}

/// Executes a task list sequentially under a fail policy.
pub struct Runner<'a> {
    executor: &'a dyn Executor,
    policy: Policy,
    working_dir: &'a Path,
    interrupt: &'a AtomicBool,
}

impl<'a> Runner<'a> {
    pub fn new(
        executor: &'a dyn Executor,
        policy: Policy,
        working_dir: &'a Path,
        interrupt: &'a AtomicBool,
    ) -> Self {
        Self {
            executor,
            policy,
            working_dir,
            interrupt,
        }
    }

    /// Run all tasks in ordinal order and seal the report.
    pub fn run(&self, tasks: &[Task]) -> RunReport {
        self.run_with_progress(tasks, |_| {})
    }

    /// Like [`run`](Self::run), invoking `on_start` just before each task
    /// begins so the CLI can print live progress.
    pub fn run_with_progress(
        &self,
        tasks: &[Task],
        mut on_start: impl FnMut(&Task),
    ) -> RunReport {
        let mut report = RunReport {
            outcomes: Vec::new(),
            halted_early: false,
            aborted: false,
            total_tasks: tasks.len(),
            started_at: Utc::now(),
        };

        for task in tasks {
            if self.interrupted() {
                report.aborted = true;
                break;
            }

            on_start(task);
            let output = self.executor.execute(&task.argv(), self.working_dir);

            // An interrupt delivered while the child was running also hit
            // the child; its outcome is for an interrupted task and is
            // discarded rather than recorded.
            if self.interrupted() {
                report.aborted = true;
                break;
            }

            let failed = !output.success();
            report.outcomes.push(TaskOutcome {
                task: task.clone(),
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
                duration_ms: output.duration_ms,
            });

            if failed && self.policy == Policy::FailFast {
                report.halted_early = true;
                break;
            }
        }

        report
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }
}

//! Report rendering for a sealed run.
//!
//! All functions here are pure: the same task list and report always render
//! byte-identical output, so the reporter can be invoked any number of
//! times over one sealed `RunReport`.

#[cfg(test)]
mod tests;

use crate::exit_codes;
use crate::matrix::Task;
use crate::runner::{RunReport, TaskOutcome};
use serde_json::json;

/// Maximum number of trailing output lines shown for a failed task.
pub const FAILURE_OUTPUT_MAX_LINES: usize = 50;

/// Maximum total characters of output shown for a failed task.
pub const FAILURE_OUTPUT_MAX_CHARS: usize = 4096;

/// Render the expanded task list without executing anything (`--list`).
pub fn render_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!(
            "{:>3}. {:<32} {}\n",
            task.ordinal + 1,
            task.label(),
            shell_words::join(task.argv()),
        ));
    }
    out.push_str(&format!("{} tasks\n", tasks.len()));
    out
}

/// Render the human-readable run report: one status line per task in
/// execution order, detail blocks naming each failed cell with its
/// captured output, and a final verdict line.
pub fn render_report(tasks: &[Task], report: &RunReport) -> String {
    let mut out = String::new();

    for (i, task) in tasks.iter().enumerate() {
        match report.outcomes.get(i) {
            Some(outcome) if outcome.passed() => {
                out.push_str(&format!(
                    "PASS     {:<32} {} ms\n",
                    task.label(),
                    outcome.duration_ms
                ));
            }
            Some(outcome) => {
                out.push_str(&format!(
                    "FAIL     {:<32} {} ms, exit code {}\n",
                    task.label(),
                    outcome.duration_ms,
                    outcome.exit_code
                ));
            }
            None => {
                out.push_str(&format!("SKIPPED  {}\n", task.label()));
            }
        }
    }

    for outcome in report.outcomes.iter().filter(|o| !o.passed()) {
        out.push('\n');
        out.push_str(&render_failure_detail(outcome));
    }

    out.push('\n');
    out.push_str(&verdict_line(report));
    out.push('\n');
    out
}

/// Render the machine-readable report (`--json`).
pub fn render_json(tasks: &[Task], report: &RunReport) -> String {
    let entries: Vec<serde_json::Value> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let base = json!({
                "ordinal": task.ordinal,
                "stage": task.stage.name,
                "configuration": task.configuration.as_ref().map(|c| c.name.clone()),
                "command": shell_words::join(task.argv()),
            });
            let mut entry = base;
            match report.outcomes.get(i) {
                Some(outcome) => {
                    entry["status"] = json!(if outcome.passed() { "pass" } else { "fail" });
                    entry["exit_code"] = json!(outcome.exit_code);
                    entry["duration_ms"] = json!(outcome.duration_ms);
                }
                None => {
                    entry["status"] = json!("skipped");
                }
            }
            entry
        })
        .collect();

    let doc = json!({
        "ts": report.started_at.to_rfc3339(),
        "verdict": verdict_word(report),
        "halted_early": report.halted_early,
        "aborted": report.aborted,
        "first_failure": report.first_failure().map(|o| o.task.label()),
        "tasks": entries,
    });

    // json! never produces a non-serializable value.
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Map a sealed report to the process exit status: zero on full success,
/// the first failing task's own exit code when it is usable, the generic
/// failure code otherwise, and the interrupt code for an aborted run.
pub fn report_exit_code(report: &RunReport) -> i32 {
    if report.aborted {
        return exit_codes::INTERRUPTED;
    }
    if report.succeeded() {
        return exit_codes::SUCCESS;
    }
    match report.first_failure() {
        Some(outcome) if outcome.exit_code > 0 => outcome.exit_code,
        _ => exit_codes::TASK_FAILURE,
    }
}

fn verdict_word(report: &RunReport) -> &'static str {
    if report.aborted {
        "aborted"
    } else if report.succeeded() {
        "pass"
    } else {
        "fail"
    }
}

fn verdict_line(report: &RunReport) -> String {
    if report.aborted {
        return format!(
            "run aborted by interrupt after {} of {} tasks",
            report.outcomes.len(),
            report.total_tasks
        );
    }
    if report.succeeded() {
        return format!("verdict: PASS ({} tasks)", report.total_tasks);
    }
    // first_failure is always present for a completed, unsuccessful run.
    let detail = match report.first_failure() {
        Some(outcome) => format!("first failure: {}", outcome.task.label()),
        None => "no failing task recorded".to_string(),
    };
    let skipped = report.total_tasks - report.outcomes.len();
    if skipped > 0 {
        format!(
            "verdict: FAIL ({}; {} of {} tasks not run)",
            detail, skipped, report.total_tasks
        )
    } else {
        format!("verdict: FAIL ({})", detail)
    }
}

fn render_failure_detail(outcome: &TaskOutcome) -> String {
    let mut out = format!(
        "--- {} failed with exit code {} ---\n",
        outcome.task.label(),
        outcome.exit_code
    );
    out.push_str(&format!(
        "command: {}\n",
        shell_words::join(outcome.task.argv())
    ));

    let stdout = String::from_utf8_lossy(&outcome.stdout);
    let stderr = String::from_utf8_lossy(&outcome.stderr);
    let combined = if stderr.is_empty() {
        stdout.to_string()
    } else if stdout.is_empty() {
        stderr.to_string()
    } else {
        format!("{}\n{}", stdout, stderr)
    };

    let truncated = truncate_output(
        combined.trim_end(),
        FAILURE_OUTPUT_MAX_LINES,
        FAILURE_OUTPUT_MAX_CHARS,
    );
    if !truncated.is_empty() {
        out.push_str(&truncated);
        out.push('\n');
    }
    out
}

/// Keep the tail of the output: the last `max_lines` lines, capped at
/// `max_chars` characters. Failures usually summarize at the end.
fn truncate_output(output: &str, max_lines: usize, max_chars: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();

    let relevant_lines: Vec<&str> = if lines.len() > max_lines {
        lines[lines.len() - max_lines..].to_vec()
    } else {
        lines
    };

    let mut result = relevant_lines.join("\n");

    if result.len() > max_chars {
        let tail_start = result.len() - max_chars;
        // Avoid slicing inside a multi-byte character.
        let tail_start = (tail_start..result.len())
            .find(|&i| result.is_char_boundary(i))
            .unwrap_or(result.len());
        result = format!("...(truncated)...\n{}", &result[tail_start..]);
    }

    result
}

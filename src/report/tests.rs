//! Reporter rendering and exit-code mapping tests.

use super::*;
use crate::exec::SPAWN_FAILURE;
use crate::matrix::{Applicability, Configuration, Matrix, Stage, expand};
use chrono::{TimeZone, Utc};

fn sample_tasks() -> Vec<Task> {
    let configs = vec![
        Configuration {
            name: "default".to_string(),
            flags: vec![],
        },
        Configuration {
            name: "all-features".to_string(),
            flags: vec!["--all-features".to_string()],
        },
    ];
    let stages = vec![
        Stage {
            name: "fmt".to_string(),
            command: vec!["cargo".to_string(), "fmt".to_string()],
            applicability: Applicability::Independent,
        },
        Stage {
            name: "build".to_string(),
            command: vec!["cargo".to_string(), "build".to_string()],
            applicability: Applicability::Configurations(vec![
                "default".to_string(),
                "all-features".to_string(),
            ]),
        },
    ];
    expand(&Matrix::new(configs, stages).unwrap())
}

fn outcome(task: &Task, exit_code: i32, stderr: &str) -> TaskOutcome {
    TaskOutcome {
        task: task.clone(),
        exit_code,
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
        duration_ms: 10,
    }
}

fn sealed(tasks: &[Task], outcomes: Vec<TaskOutcome>, halted_early: bool, aborted: bool) -> RunReport {
    RunReport {
        outcomes,
        halted_early,
        aborted,
        total_tasks: tasks.len(),
        started_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn task_list_shows_every_cell_with_its_command() {
    let tasks = sample_tasks();
    let listing = render_task_list(&tasks);

    assert!(listing.contains("fmt"));
    assert!(listing.contains("build (default)"));
    assert!(listing.contains("build (all-features)"));
    assert!(listing.contains("cargo build --all-features"));
    assert!(listing.contains("3 tasks"));
}

#[test]
fn passing_report_has_pass_lines_and_pass_verdict() {
    let tasks = sample_tasks();
    let outcomes = tasks.iter().map(|t| outcome(t, 0, "")).collect();
    let report = sealed(&tasks, outcomes, false, false);
    let rendered = render_report(&tasks, &report);

    assert_eq!(rendered.matches("PASS").count(), 4, "3 lines + verdict");
    assert!(rendered.contains("verdict: PASS (3 tasks)"));
    assert!(!rendered.contains("FAIL"));
    assert_eq!(report_exit_code(&report), exit_codes::SUCCESS);
}

#[test]
fn failed_report_names_the_failing_cell_and_shows_stderr() {
    let tasks = sample_tasks();
    // fmt passed, build (default) failed, build (all-features) never ran.
    let outcomes = vec![
        outcome(&tasks[0], 0, ""),
        outcome(&tasks[1], 101, "error[E0308]: mismatched types"),
    ];
    let report = sealed(&tasks, outcomes, true, false);
    let rendered = render_report(&tasks, &report);

    assert!(rendered.contains("FAIL     build (default)"));
    assert!(rendered.contains("SKIPPED  build (all-features)"));
    assert!(rendered.contains("--- build (default) failed with exit code 101 ---"));
    assert!(rendered.contains("error[E0308]: mismatched types"));
    assert!(rendered.contains("first failure: build (default)"));
    assert!(rendered.contains("1 of 3 tasks not run"));
}

#[test]
fn aborted_report_is_distinct_from_failure() {
    let tasks = sample_tasks();
    let outcomes = vec![outcome(&tasks[0], 0, "")];
    let report = sealed(&tasks, outcomes, false, true);
    let rendered = render_report(&tasks, &report);

    assert!(rendered.contains("run aborted by interrupt after 1 of 3 tasks"));
    assert!(!rendered.contains("verdict:"));
    assert_eq!(report_exit_code(&report), exit_codes::INTERRUPTED);
}

#[test]
fn rendering_is_idempotent() {
    let tasks = sample_tasks();
    let outcomes = vec![
        outcome(&tasks[0], 0, ""),
        outcome(&tasks[1], 101, "boom"),
    ];
    let report = sealed(&tasks, outcomes, true, false);

    assert_eq!(render_report(&tasks, &report), render_report(&tasks, &report));
    assert_eq!(render_json(&tasks, &report), render_json(&tasks, &report));
    assert_eq!(render_task_list(&tasks), render_task_list(&tasks));
}

#[test]
fn exit_code_propagates_the_first_failing_task() {
    let tasks = sample_tasks();
    let outcomes = vec![
        outcome(&tasks[0], 0, ""),
        outcome(&tasks[1], 42, "boom"),
    ];
    let report = sealed(&tasks, outcomes, true, false);

    assert_eq!(report_exit_code(&report), 42);
}

#[test]
fn spawn_sentinel_maps_to_generic_failure_code() {
    let tasks = sample_tasks();
    let outcomes = vec![outcome(&tasks[0], SPAWN_FAILURE, "failed to execute 'cargo'")];
    let report = sealed(&tasks, outcomes, true, false);

    assert_eq!(report_exit_code(&report), exit_codes::TASK_FAILURE);
}

#[test]
fn json_report_carries_verdict_and_per_task_status() {
    let tasks = sample_tasks();
    let outcomes = vec![
        outcome(&tasks[0], 0, ""),
        outcome(&tasks[1], 101, "boom"),
    ];
    let report = sealed(&tasks, outcomes, true, false);

    let doc: serde_json::Value = serde_json::from_str(&render_json(&tasks, &report)).unwrap();
    assert_eq!(doc["verdict"], "fail");
    assert_eq!(doc["halted_early"], true);
    assert_eq!(doc["first_failure"], "build (default)");
    assert_eq!(doc["tasks"][0]["status"], "pass");
    assert_eq!(doc["tasks"][1]["status"], "fail");
    assert_eq!(doc["tasks"][1]["exit_code"], 101);
    assert_eq!(doc["tasks"][2]["status"], "skipped");
    assert_eq!(doc["tasks"][2]["configuration"], "all-features");
}

#[test]
fn truncation_keeps_the_tail_of_long_output() {
    let long: String = (0..200)
        .map(|i| format!("line {}\n", i))
        .collect();
    let truncated = truncate_output(long.trim_end(), 50, 4096);

    assert!(truncated.contains("line 199"));
    assert!(!truncated.contains("line 10\n"));
    assert_eq!(truncated.lines().count(), 50);
}

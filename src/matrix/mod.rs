//! Validation-matrix data model.
//!
//! A matrix is an ordered list of build [`Configuration`]s crossed with an
//! ordered list of check [`Stage`]s. Stages are either configuration
//! independent (they run exactly once, e.g. a format check) or configuration
//! sensitive with an explicit applicability set (they run once per named
//! configuration, e.g. build/test under `--all-features`).
//!
//! Definitions are validated up front by [`Matrix::new`]; expansion into an
//! ordered task list lives in [`builder`].

mod builder;


pub use builder::expand;

use crate::error::{GauntletError, Result};
use std::collections::BTreeSet;

/// A named feature-flag combination under which the project is checked.
///
/// `flags` are appended verbatim to every configuration-sensitive stage
/// command (e.g. `["--all-features"]`). The default configuration carries
/// no flags at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub flags: Vec<String>,
}

/// Which configurations a stage runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// The stage is configuration independent and runs exactly once.
    Independent,
    /// The stage runs once per listed configuration, in configuration
    /// declaration order. An empty list means the stage is intentionally
    /// skipped and expands to zero tasks.
    Configurations(Vec<String>),
}

/// A class of check (lint, format, build, test, doc). Identity by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    /// The base argv, before configuration flags are appended.
    pub command: Vec<String>,
    pub applicability: Applicability,
}

/// One (stage, configuration) execution unit, produced by [`expand`].
///
/// `ordinal` fixes execution order: strictly increasing, assigned at
/// matrix-build time, never reordered afterward. `configuration` is `None`
/// exactly when the stage is configuration independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub ordinal: usize,
    pub stage: Stage,
    pub configuration: Option<Configuration>,
}

impl Task {
    /// The full argv for this task: the stage command with the
    /// configuration's flags appended (when present).
    pub fn argv(&self) -> Vec<String> {
        let mut argv = self.stage.command.clone();
        if let Some(config) = &self.configuration {
            argv.extend(config.flags.iter().cloned());
        }
        argv
    }

    /// Human-readable cell label: `"build (all-features)"` or `"fmt"`.
    pub fn label(&self) -> String {
        match &self.configuration {
            Some(config) => format!("{} ({})", self.stage.name, config.name),
            None => self.stage.name.clone(),
        }
    }
}

/// A validated matrix definition: configurations and stages, both in
/// declaration order. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Matrix {
    configurations: Vec<Configuration>,
    stages: Vec<Stage>,
}

impl Matrix {
    /// Validate and seal a matrix definition.
    ///
    /// Rejected at definition time: an empty stage list, duplicate
    /// configuration or stage names, an empty stage command, and a stage
    /// that references a configuration that was never declared.
    pub fn new(configurations: Vec<Configuration>, stages: Vec<Stage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(GauntletError::Config("stage list is empty".to_string()));
        }

        let mut config_names = BTreeSet::new();
        for config in &configurations {
            if !config_names.insert(config.name.as_str()) {
                return Err(GauntletError::Config(format!(
                    "duplicate configuration '{}'",
                    config.name
                )));
            }
        }

        let mut stage_names = BTreeSet::new();
        for stage in &stages {
            if !stage_names.insert(stage.name.as_str()) {
                return Err(GauntletError::Config(format!(
                    "duplicate stage '{}'",
                    stage.name
                )));
            }
            if stage.command.is_empty() {
                return Err(GauntletError::Config(format!(
                    "stage '{}' has an empty command",
                    stage.name
                )));
            }
            if let Applicability::Configurations(names) = &stage.applicability {
                for name in names {
                    if !config_names.contains(name.as_str()) {
                        return Err(GauntletError::Config(format!(
                            "stage '{}' references undeclared configuration '{}'",
                            stage.name, name
                        )));
                    }
                }
            }
        }

        Ok(Self {
            configurations,
            stages,
        })
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}

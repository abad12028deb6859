//! Matrix expansion: stages × applicable configurations → ordered tasks.

use super::{Applicability, Matrix, Task};

/// Expand a validated matrix into its ordered task list.
///
/// Stages are walked in declaration order. A configuration-independent
/// stage emits exactly one task with no configuration. A sensitive stage
/// emits one task per declared configuration present in its applicability
/// set, in configuration declaration order; configurations outside the set
/// are skipped. Ordinals are assigned sequentially as tasks are emitted,
/// so the interleaving is deterministic and declaration-order preserving.
pub fn expand(matrix: &Matrix) -> Vec<Task> {
    let mut tasks = Vec::new();

    for stage in matrix.stages() {
        match &stage.applicability {
            Applicability::Independent => {
                tasks.push(Task {
                    ordinal: tasks.len(),
                    stage: stage.clone(),
                    configuration: None,
                });
            }
            Applicability::Configurations(names) => {
                for config in matrix.configurations() {
                    if !names.contains(&config.name) {
                        continue;
                    }
                    tasks.push(Task {
                        ordinal: tasks.len(),
                        stage: stage.clone(),
                        configuration: Some(config.clone()),
                    });
                }
            }
        }
    }

    tasks
}

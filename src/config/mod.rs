//! Matrix definition loading.
//!
//! Definitions come from a YAML matrix file when one is given (or found in
//! the working directory), falling back to the built-in default matrix.
//! Every path through here ends in [`Matrix::new`], so a loaded definition
//! is always validated before anything runs.

mod model;


pub use model::{ConfigurationEntry, MatrixFile, StageEntry};

use crate::error::{GauntletError, Result};
use crate::matrix::{Applicability, Configuration, Matrix, Stage};
use std::fs;
use std::path::Path;

/// File name probed in the working directory when no `--config` is given.
pub const DEFAULT_MATRIX_FILE: &str = "gauntlet.yaml";

/// Resolve the matrix definition for a run.
///
/// An explicit path must exist and parse. Otherwise `gauntlet.yaml` in the
/// working directory is used when present, and the built-in default matrix
/// when it is not.
pub fn load_matrix(explicit: Option<&Path>, working_dir: &Path) -> Result<Matrix> {
    let file = match explicit {
        Some(path) => load_file(path)?,
        None => {
            let probed = working_dir.join(DEFAULT_MATRIX_FILE);
            if probed.is_file() {
                load_file(&probed)?
            } else {
                MatrixFile::default()
            }
        }
    };
    build_matrix(file)
}

fn load_file(path: &Path) -> Result<MatrixFile> {
    let raw = fs::read_to_string(path).map_err(|source| GauntletError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| GauntletError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn raw file entries into a validated [`Matrix`], splitting command
/// strings shell-style.
fn build_matrix(file: MatrixFile) -> Result<Matrix> {
    let configurations = file
        .configurations
        .into_iter()
        .map(|entry| Configuration {
            name: entry.name,
            flags: entry.flags,
        })
        .collect();

    let stages = file
        .stages
        .into_iter()
        .map(|entry| {
            let command = shell_words::split(&entry.command).map_err(|err| {
                GauntletError::Config(format!(
                    "stage '{}' has an unparsable command: {}",
                    entry.name, err
                ))
            })?;
            Ok(Stage {
                name: entry.name,
                command,
                applicability: match entry.configurations {
                    None => Applicability::Independent,
                    Some(names) => Applicability::Configurations(names),
                },
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Matrix::new(configurations, stages)
}

//! Error types for the gauntlet CLI.
//!
//! Uses thiserror for derive macros. Only matrix-definition problems are
//! modeled as errors: failures of the external commands themselves are
//! ordinary `TaskOutcome`s handled by the runner's policy, and interrupts
//! surface as an aborted `RunReport`, not an error.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gauntlet operations.
///
/// Every variant is fatal before any task has run and maps to the config
/// exit code, keeping it distinct from task-failure codes.
#[derive(Error, Debug)]
pub enum GauntletError {
    /// The matrix definition is malformed (duplicate names, empty stage
    /// list, reference to an undeclared configuration, unparsable command).
    #[error("invalid matrix definition: {0}")]
    Config(String),

    /// The matrix file could not be read.
    #[error("failed to read matrix file '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The matrix file could not be parsed as YAML.
    #[error("failed to parse matrix file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl GauntletError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GauntletError::Config(_)
            | GauntletError::ConfigIo { .. }
            | GauntletError::ConfigParse { .. } => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for gauntlet operations.
pub type Result<T> = std::result::Result<T, GauntletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_config_exit_code() {
        let err = GauntletError::Config("duplicate configuration 'default'".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn config_io_error_has_config_exit_code() {
        let err = GauntletError::ConfigIo {
            path: PathBuf::from("matrix.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GauntletError::Config("stage list is empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid matrix definition: stage list is empty"
        );

        let err = GauntletError::ConfigIo {
            path: PathBuf::from("gauntlet.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("gauntlet.yaml"));
    }
}

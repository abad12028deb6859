//! Matrix-file schema and the built-in default matrix.

use serde::Deserialize;

/// Contents of a matrix definition file (`gauntlet.yaml`).
///
/// Both sections default independently, so a file may override just the
/// stages while keeping the stock configurations. Unknown fields are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixFile {
    #[serde(default = "default_configurations")]
    pub configurations: Vec<ConfigurationEntry>,

    #[serde(default = "default_stages")]
    pub stages: Vec<StageEntry>,
}

impl Default for MatrixFile {
    fn default() -> Self {
        Self {
            configurations: default_configurations(),
            stages: default_stages(),
        }
    }
}

/// One named feature-flag combination.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationEntry {
    pub name: String,

    /// Arguments appended to every configuration-sensitive stage command.
    #[serde(default)]
    pub flags: Vec<String>,
}

/// One check stage.
#[derive(Debug, Clone, Deserialize)]
pub struct StageEntry {
    pub name: String,

    /// The command line, shell-style. Configuration flags are appended
    /// after the parsed arguments.
    pub command: String,

    /// Names of the configurations this stage runs under, in any order.
    /// Omit the field entirely for a configuration-independent stage that
    /// runs exactly once; an explicit empty list skips the stage.
    #[serde(default)]
    pub configurations: Option<Vec<String>>,
}

fn entry(name: &str, flags: &[&str]) -> ConfigurationEntry {
    ConfigurationEntry {
        name: name.to_string(),
        flags: flags.iter().map(|s| s.to_string()).collect(),
    }
}

fn stage(name: &str, command: &str, configurations: Option<&[&str]>) -> StageEntry {
    StageEntry {
        name: name.to_string(),
        command: command.to_string(),
        configurations: configurations.map(|c| c.iter().map(|s| s.to_string()).collect()),
    }
}

/// The stock configurations for a feature-flagged Cargo project.
pub fn default_configurations() -> Vec<ConfigurationEntry> {
    vec![
        entry("default", &[]),
        entry("all-features", &["--all-features"]),
        entry("no-default-features", &["--no-default-features"]),
    ]
}

/// The stock validation gate, in gate order.
///
/// The asymmetry is deliberate: the format check is configuration
/// independent, clippy does not run under no-default-features, while
/// build and test cover every configuration. Docs build once.
pub fn default_stages() -> Vec<StageEntry> {
    vec![
        stage("fmt", "cargo fmt --all -- --check", None),
        stage(
            "clippy",
            "cargo clippy --all-targets -- -D warnings",
            Some(&["default", "all-features"]),
        ),
        stage(
            "build",
            "cargo build",
            Some(&["default", "all-features", "no-default-features"]),
        ),
        stage(
            "test",
            "cargo test",
            Some(&["default", "all-features", "no-default-features"]),
        ),
        stage("doc", "cargo doc --no-deps", None),
    ]
}

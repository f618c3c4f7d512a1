//! Error type for the `cmdtree` binary.

use thiserror::Error;

/// Errors surfaced to the user by `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsing or YAML output failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The built-in command tree could not be assembled.
    #[error("invalid command tree: {0}")]
    Tree(#[from] command_tree_core::TreeError),

    /// Arguments named a command that does not exist.
    #[error("{0}")]
    UnknownCommand(String),
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;

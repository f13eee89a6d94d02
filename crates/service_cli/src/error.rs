//! Error types for the riskgo CLI.

use pricer_risk::ScenarioError;
use thiserror::Error;

/// Errors raised while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed command line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request file is not valid JSON for the command
    #[error("Invalid request file: {0}")]
    Json(#[from] serde_json::Error),

    /// Evaluation rejected the request
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

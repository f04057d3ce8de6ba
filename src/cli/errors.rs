//! CLI error types

use thiserror::Error;

use crate::planner::PlannerError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the CLI layer
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the expression input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The expression input is not a valid tagged JSON tree
    #[error("invalid expression JSON: {0}")]
    Expression(#[from] serde_json::Error),

    /// A flag value could not be interpreted
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Planning aborted
    #[error("planning failed: {0}")]
    Planner(#[from] PlannerError),
}

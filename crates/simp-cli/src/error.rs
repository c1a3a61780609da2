//! Driver error types.

use thiserror::Error;

/// Errors that stop the demo driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown sample program: {0} (try --list)")]
    UnknownScenario(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

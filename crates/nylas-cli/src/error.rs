//! CLI error type.

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] nylas::Error),

    #[error("{0}")]
    Usage(String),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

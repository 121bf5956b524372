//! CLI error type.

use std::path::PathBuf;

use formkit_lib::error::ConfigError;
use thiserror::Error;

/// Errors that abort a `formkit` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No --config given and no default config location is available")]
    NoConfig,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read record '{}': {source}", path.display())]
    ReadRecord {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

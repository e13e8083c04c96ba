//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Env file parsing error in `{0}`")]
    EnvFile(PathBuf, #[source] dotenv::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

//! Data file error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading page data or string bundles.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML parsing error in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("JSON parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` must contain a mapping at the top level")]
    NotAMapping(PathBuf),
}

//! Errors raised while converting between formats

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}'")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

//! Error types for EOS configuration resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration {path} is incomplete or not valid: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write configuration file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Failure loading a combobox configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config defines no options")]
    NoOptions,
}

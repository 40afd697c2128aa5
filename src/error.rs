//! Error types for source collection.
//!
//! Per-file read failures are not represented here: they are written inline
//! into the output and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Failed to open output file {path:?}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to walk directory {root:?}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid extension: {0:?}")]
    InvalidExtension(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for CombineError {
    fn from(err: config::ConfigError) -> Self {
        CombineError::ConfigError(err.to_string())
    }
}

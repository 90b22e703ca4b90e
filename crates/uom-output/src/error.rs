use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing an issue report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown output format '{0}' (expected csv or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, OutputError>;

//! Error types for material data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the material snapshot or the
/// duplicate-UPC dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Required column not found in the table.
    #[error("required column '{column}' not found in {table}")]
    MissingColumn { column: String, table: &'static str },

    /// Required value is null or blank.
    #[error("{table} row {row}: column '{column}' must not be blank")]
    MissingValue {
        table: &'static str,
        column: String,
        row: usize,
    },

    /// Non-numeric text in a numeric column.
    #[error("{table} row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        table: &'static str,
        column: String,
        row: usize,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

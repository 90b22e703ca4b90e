//! CSV file reading.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Check that the file exists and is readable before handing it to Polars.
pub fn check_file(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reads a CSV file into a Polars DataFrame with every column as String.
///
/// Schema inference is disabled so identifiers and UPCs keep their leading
/// zeros; numeric columns are parsed afterwards by the row decoder.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_file(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );

    Ok(df)
}

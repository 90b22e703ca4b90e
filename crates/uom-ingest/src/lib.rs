//! Material master-data ingestion.
//!
//! This crate loads the audit's input datasets into typed rows:
//!
//! - **CSV Loading**: read exports into Polars DataFrames with every column as text
//! - **Row Decoding**: strict conversion of DataFrame cells into [`uom_model`] rows
//! - **Sources**: the [`MaterialSource`] trait with CSV and in-memory implementations
//!
//! # Example
//!
//! ```ignore
//! use uom_ingest::{CsvSource, MaterialSource};
//!
//! let source = CsvSource::new("exports/materials.csv", "exports/duplicate_upc.csv");
//! let rows = source.material_rows()?;
//! let duplicates = source.duplicate_upcs()?;
//! ```

mod columns;
mod csv;
mod decode;
mod error;
pub mod polars_utils;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{check_file, read_csv_frame};

// === Row Decoding ===
pub use columns::ColumnLookup;
pub use decode::{
    DUPLICATE_UPC_COLUMNS, DUPLICATE_UPC_TABLE, MATERIAL_COLUMNS, MATERIAL_TABLE,
    duplicate_upc_rows_from_frame, material_rows_from_frame,
};

// === Sources ===
pub use source::{CsvSource, InMemorySource, MaterialSource};

//! Data sources for the audit.
//!
//! The audit consumes two datasets: the material/UOM snapshot and the
//! corpus-wide duplicate-UPC listing. Both are fetched once per run.

use std::path::{Path, PathBuf};

use tracing::info;

use uom_model::{DuplicateUpcRow, MaterialUomRow};

use crate::csv::read_csv_frame;
use crate::decode::{duplicate_upc_rows_from_frame, material_rows_from_frame};
use crate::error::Result;

/// Provider of the audit's input datasets.
pub trait MaterialSource {
    /// The material snapshot, sorted by `(material_number, conversion_numerator)`.
    fn material_rows(&self) -> Result<Vec<MaterialUomRow>>;

    /// `(upc, material_number, alt_uom)` triples for every UPC that occurs
    /// more than once anywhere in the corpus.
    fn duplicate_upcs(&self) -> Result<Vec<DuplicateUpcRow>>;
}

/// Source backed by two CSV exports.
#[derive(Debug, Clone)]
pub struct CsvSource {
    materials: PathBuf,
    duplicate_upcs: PathBuf,
}

impl CsvSource {
    pub fn new(materials: impl Into<PathBuf>, duplicate_upcs: impl Into<PathBuf>) -> Self {
        Self {
            materials: materials.into(),
            duplicate_upcs: duplicate_upcs.into(),
        }
    }

    pub fn materials_path(&self) -> &Path {
        &self.materials
    }

    pub fn duplicate_upcs_path(&self) -> &Path {
        &self.duplicate_upcs
    }
}

impl MaterialSource for CsvSource {
    fn material_rows(&self) -> Result<Vec<MaterialUomRow>> {
        let df = read_csv_frame(&self.materials)?;
        let rows = material_rows_from_frame(&df)?;
        info!(
            path = %self.materials.display(),
            rows = rows.len(),
            "material snapshot loaded"
        );
        Ok(rows)
    }

    fn duplicate_upcs(&self) -> Result<Vec<DuplicateUpcRow>> {
        let df = read_csv_frame(&self.duplicate_upcs)?;
        let rows = duplicate_upc_rows_from_frame(&df)?;
        info!(
            path = %self.duplicate_upcs.display(),
            rows = rows.len(),
            "duplicate UPC listing loaded"
        );
        Ok(rows)
    }
}

/// Source over rows already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub materials: Vec<MaterialUomRow>,
    pub duplicate_upcs: Vec<DuplicateUpcRow>,
}

impl InMemorySource {
    pub fn new(materials: Vec<MaterialUomRow>, duplicate_upcs: Vec<DuplicateUpcRow>) -> Self {
        Self {
            materials,
            duplicate_upcs,
        }
    }
}

impl MaterialSource for InMemorySource {
    fn material_rows(&self) -> Result<Vec<MaterialUomRow>> {
        Ok(self.materials.clone())
    }

    fn duplicate_upcs(&self) -> Result<Vec<DuplicateUpcRow>> {
        Ok(self.duplicate_upcs.clone())
    }
}

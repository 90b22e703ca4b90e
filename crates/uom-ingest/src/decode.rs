//! Typed row decoding.
//!
//! Converts a loaded DataFrame into [`MaterialUomRow`] / [`DuplicateUpcRow`]
//! values. Numeric columns are parsed strictly: blanks become null, anything
//! else that is not a number fails the load with the row and column named.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use uom_model::{DuplicateUpcRow, MaterialUomRow};

use crate::columns::{ColumnLookup, required_column, value_at};
use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_f64_strict, any_to_i64_strict, any_to_string_non_empty};

pub const MATERIAL_TABLE: &str = "material";
pub const DUPLICATE_UPC_TABLE: &str = "duplicate_upc";

/// Columns of the material snapshot, in export order.
pub const MATERIAL_COLUMNS: [&str; 12] = [
    "material_number",
    "product_category",
    "base_uom",
    "alt_uom",
    "conversion_numerator",
    "conversion_denominator",
    "upc",
    "length",
    "width",
    "height",
    "volume",
    "gross_weight",
];

/// Columns of the duplicate-UPC dataset.
pub const DUPLICATE_UPC_COLUMNS: [&str; 3] = ["upc", "material_number", "alt_uom"];

struct MaterialColumns<'df> {
    material_number: &'df Column,
    product_category: &'df Column,
    base_uom: &'df Column,
    alt_uom: &'df Column,
    numerator: &'df Column,
    denominator: &'df Column,
    upc: &'df Column,
    length: &'df Column,
    width: &'df Column,
    height: &'df Column,
    volume: &'df Column,
    gross_weight: &'df Column,
}

impl<'df> MaterialColumns<'df> {
    fn resolve(df: &'df DataFrame) -> Result<Self> {
        let lookup = ColumnLookup::from_frame(df);
        let column = |name: &str| required_column(df, &lookup, MATERIAL_TABLE, name);
        Ok(Self {
            material_number: column("material_number")?,
            product_category: column("product_category")?,
            base_uom: column("base_uom")?,
            alt_uom: column("alt_uom")?,
            numerator: column("conversion_numerator")?,
            denominator: column("conversion_denominator")?,
            upc: column("upc")?,
            length: column("length")?,
            width: column("width")?,
            height: column("height")?,
            volume: column("volume")?,
            gross_weight: column("gross_weight")?,
        })
    }
}

/// Decode the material snapshot. Row order is preserved.
pub fn material_rows_from_frame(df: &DataFrame) -> Result<Vec<MaterialUomRow>> {
    let columns = MaterialColumns::resolve(df)?;
    let mut rows = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let line = idx + 1;
        rows.push(MaterialUomRow {
            material_number: required_text(columns.material_number, idx, MATERIAL_TABLE)?,
            product_category: any_to_string_non_empty(value_at(columns.product_category, idx)),
            base_uom: required_text(columns.base_uom, idx, MATERIAL_TABLE)?,
            alt_uom: required_text(columns.alt_uom, idx, MATERIAL_TABLE)?,
            conversion_numerator: integer(columns.numerator, idx)?,
            conversion_denominator: integer(columns.denominator, idx)?,
            upc: any_to_string_non_empty(value_at(columns.upc, idx)),
            length: float(columns.length, idx)?,
            width: float(columns.width, idx)?,
            height: float(columns.height, idx)?,
            volume: float(columns.volume, idx)?,
            gross_weight: float(columns.gross_weight, idx)?,
        });
        if line % 10_000 == 0 {
            debug!(rows = line, "decoding material rows");
        }
    }

    Ok(rows)
}

/// Decode the duplicate-UPC dataset. Row order is preserved.
pub fn duplicate_upc_rows_from_frame(df: &DataFrame) -> Result<Vec<DuplicateUpcRow>> {
    let lookup = ColumnLookup::from_frame(df);
    let upc = required_column(df, &lookup, DUPLICATE_UPC_TABLE, "upc")?;
    let material_number = required_column(df, &lookup, DUPLICATE_UPC_TABLE, "material_number")?;
    let alt_uom = required_column(df, &lookup, DUPLICATE_UPC_TABLE, "alt_uom")?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        rows.push(DuplicateUpcRow {
            upc: required_text(upc, idx, DUPLICATE_UPC_TABLE)?,
            material_number: required_text(material_number, idx, DUPLICATE_UPC_TABLE)?,
            alt_uom: required_text(alt_uom, idx, DUPLICATE_UPC_TABLE)?,
        });
    }
    Ok(rows)
}

fn required_text(column: &Column, idx: usize, table: &'static str) -> Result<String> {
    any_to_string_non_empty(value_at(column, idx)).ok_or_else(|| IngestError::MissingValue {
        table,
        column: column.name().to_string(),
        row: idx + 1,
    })
}

fn integer(column: &Column, idx: usize) -> Result<Option<i64>> {
    any_to_i64_strict(value_at(column, idx)).map_err(|value| IngestError::InvalidValue {
        table: MATERIAL_TABLE,
        column: column.name().to_string(),
        row: idx + 1,
        value,
    })
}

fn float(column: &Column, idx: usize) -> Result<Option<f64>> {
    any_to_f64_strict(value_at(column, idx)).map_err(|value| IngestError::InvalidValue {
        table: MATERIAL_TABLE,
        column: column.name().to_string(),
        row: idx + 1,
        value,
    })
}

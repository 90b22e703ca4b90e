//! Material master-data rows.
//!
//! One [`MaterialUomRow`] describes a single packaging level (each, case,
//! pallet, ...) of a material. The row whose `alt_uom` equals its `base_uom`
//! is the base row; every other row is an alternate level tied to the base by
//! its conversion numerator/denominator.

use serde::{Deserialize, Serialize};

/// One (material, unit of measure) row of the master-data snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialUomRow {
    pub material_number: String,
    pub product_category: Option<String>,
    pub base_uom: String,
    pub alt_uom: String,
    /// Number of base units composing one unit of this level.
    pub conversion_numerator: Option<i64>,
    pub conversion_denominator: Option<i64>,
    pub upc: Option<String>,
    /// Inches.
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Cubic feet.
    pub volume: Option<f64>,
    /// Pounds.
    pub gross_weight: Option<f64>,
}

impl MaterialUomRow {
    /// Create a row with identifiers and conversion only; measurements are null.
    pub fn new(
        material_number: impl Into<String>,
        base_uom: impl Into<String>,
        alt_uom: impl Into<String>,
        numerator: Option<i64>,
        denominator: Option<i64>,
    ) -> Self {
        Self {
            material_number: material_number.into(),
            base_uom: base_uom.into(),
            alt_uom: alt_uom.into(),
            conversion_numerator: numerator,
            conversion_denominator: denominator,
            ..Self::default()
        }
    }

    /// True when this row describes the material's base unit.
    pub fn is_base(&self) -> bool {
        self.base_uom == self.alt_uom
    }

    pub fn is_alternate(&self) -> bool {
        !self.is_base()
    }

    /// `conversion_numerator > value`; a null numerator never passes.
    pub fn numerator_above(&self, value: i64) -> bool {
        matches!(self.conversion_numerator, Some(n) if n > value)
    }

    /// `conversion_denominator > value`; a null denominator never passes.
    pub fn denominator_above(&self, value: i64) -> bool {
        matches!(self.conversion_denominator, Some(d) if d > value)
    }

    /// Numerator and denominator are both present and equal.
    pub fn is_one_to_one(&self) -> bool {
        matches!(
            (self.conversion_numerator, self.conversion_denominator),
            (Some(n), Some(d)) if n == d
        )
    }

    /// Alternate level that converts 1:1 (or n:n) to its base.
    ///
    /// Such levels are excluded from the UPC requirements.
    pub fn is_equivalent_alternate(&self) -> bool {
        self.is_alternate() && self.is_one_to_one()
    }

    /// Length, width and height in that order.
    pub fn dimensions(&self) -> [Option<f64>; 3] {
        [self.length, self.width, self.height]
    }

    /// `"<material_number> - <alt_uom>"`, the key used in collision listings.
    pub fn key(&self) -> String {
        uom_key(&self.material_number, &self.alt_uom)
    }
}

/// One occurrence of a UPC that appears more than once across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateUpcRow {
    pub upc: String,
    pub material_number: String,
    pub alt_uom: String,
}

impl DuplicateUpcRow {
    pub fn new(
        upc: impl Into<String>,
        material_number: impl Into<String>,
        alt_uom: impl Into<String>,
    ) -> Self {
        Self {
            upc: upc.into(),
            material_number: material_number.into(),
            alt_uom: alt_uom.into(),
        }
    }

    pub fn key(&self) -> String {
        uom_key(&self.material_number, &self.alt_uom)
    }
}

/// Format a material/UOM pair the way issue messages list it.
pub fn uom_key(material_number: &str, alt_uom: &str) -> String {
    format!("{material_number} - {alt_uom}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_row_detection() {
        let base = MaterialUomRow::new("1001", "EA", "EA", Some(1), Some(1));
        let case = MaterialUomRow::new("1001", "EA", "CS", Some(12), Some(1));
        assert!(base.is_base());
        assert!(!base.is_alternate());
        assert!(case.is_alternate());
    }

    #[test]
    fn null_conversion_never_passes_comparisons() {
        let row = MaterialUomRow::new("1001", "EA", "CS", None, None);
        assert!(!row.numerator_above(0));
        assert!(!row.denominator_above(0));
        assert!(!row.is_one_to_one());
    }

    #[test]
    fn equivalent_alternate_requires_alternate_row() {
        let base = MaterialUomRow::new("1001", "EA", "EA", Some(1), Some(1));
        let inner = MaterialUomRow::new("1001", "EA", "IP", Some(1), Some(1));
        assert!(!base.is_equivalent_alternate());
        assert!(inner.is_equivalent_alternate());
    }

    #[test]
    fn key_format() {
        let row = MaterialUomRow::new("1001", "EA", "CS", Some(12), Some(1));
        assert_eq!(row.key(), "1001 - CS");
        assert_eq!(DuplicateUpcRow::new("0123", "2002", "EA").key(), "2002 - EA");
    }
}

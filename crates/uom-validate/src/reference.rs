//! Base-row reference lookup.
//!
//! Rules that compare an alternate level against its base join each row to
//! the material's base-row attributes. The join has inner semantics: a
//! material without a base row matches nothing, and a material with several
//! base rows matches each of them.

use std::collections::BTreeMap;

use uom_model::MaterialUomRow;

/// Base-row attributes of one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRow<'a> {
    pub material_number: &'a str,
    pub base_gross_weight: Option<f64>,
    pub base_volume: Option<f64>,
    pub base_upc: Option<&'a str>,
}

impl<'a> ReferenceRow<'a> {
    fn from_base(row: &'a MaterialUomRow) -> Self {
        Self {
            material_number: &row.material_number,
            base_gross_weight: row.gross_weight,
            base_volume: row.volume,
            base_upc: row.upc.as_deref(),
        }
    }
}

/// Mapping from material number to its base rows, in input order.
#[derive(Debug, Clone, Default)]
pub struct BaseReference<'a> {
    by_material: BTreeMap<&'a str, Vec<ReferenceRow<'a>>>,
}

impl<'a> BaseReference<'a> {
    /// Collect every row whose `alt_uom` equals its `base_uom`.
    pub fn extract(rows: &'a [MaterialUomRow]) -> Self {
        let mut by_material: BTreeMap<&'a str, Vec<ReferenceRow<'a>>> = BTreeMap::new();
        for row in rows.iter().filter(|row| row.is_base()) {
            by_material
                .entry(row.material_number.as_str())
                .or_default()
                .push(ReferenceRow::from_base(row));
        }
        Self { by_material }
    }

    /// Base rows of a material; empty when it has none.
    pub fn matches(&self, material_number: &str) -> &[ReferenceRow<'a>] {
        self.by_material
            .get(material_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when the material has at least one base row.
    pub fn has_base(&self, material_number: &str) -> bool {
        self.by_material.contains_key(material_number)
    }

    /// Inner join of `rows` against the reference, in row order.
    ///
    /// Each row is paired with every base row of its material.
    pub fn join<'r, I>(&'r self, rows: I) -> impl Iterator<Item = (&'a MaterialUomRow, &'r ReferenceRow<'a>)>
    where
        I: IntoIterator<Item = &'a MaterialUomRow>,
        I::IntoIter: 'r,
    {
        rows.into_iter().flat_map(move |row| {
            self.matches(&row.material_number)
                .iter()
                .map(move |reference| (row, reference))
        })
    }

    /// Number of materials with at least one base row.
    pub fn len(&self) -> usize {
        self.by_material.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_material.is_empty()
    }
}

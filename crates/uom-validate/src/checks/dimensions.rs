//! Package dimension checks.

use std::collections::BTreeSet;

use uom_model::MaterialUomRow;

use super::is_packaging_level;
use crate::format::Flagged;

/// Placeholder value the master-data UI fills into every dimension.
const DEFAULT_DIMENSION: f64 = 1.0;

fn all_default(row: &MaterialUomRow) -> bool {
    row.dimensions()
        .iter()
        .all(|dim| *dim == Some(DEFAULT_DIMENSION))
}

fn any_missing(row: &MaterialUomRow) -> bool {
    row.dimensions().iter().any(Option::is_none)
}

fn any_zero(row: &MaterialUomRow) -> bool {
    row.dimensions().iter().any(|dim| *dim == Some(0.0))
}

/// Packaging levels whose LxWxH are all placeholders, partly missing or zero.
///
/// Rows are emitted grouped by the first failing check (placeholders, then
/// missing, then zero), each row at most once.
pub(super) fn package_dimensions(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    let candidates: Vec<(usize, &MaterialUomRow)> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| is_packaging_level(row))
        .collect();

    let checks: [fn(&MaterialUomRow) -> bool; 3] = [all_default, any_missing, any_zero];
    // Dedup is by snapshot position: two identical snapshot rows are two
    // (material, UOM) records and both are reported.
    let mut seen = BTreeSet::new();
    let mut flagged = Vec::new();
    for check in checks {
        for &(idx, row) in &candidates {
            if check(row) && seen.insert(idx) {
                flagged.push(Flagged::row(row));
            }
        }
    }
    flagged
}

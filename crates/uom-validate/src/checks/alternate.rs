//! Checks relating alternate levels to the base unit.

use std::collections::{BTreeMap, BTreeSet};

use uom_model::MaterialUomRow;

use crate::config::AuditConfig;
use crate::format::Flagged;
use crate::reference::BaseReference;

/// Base rows of materials that have no alternate level beyond 1:1.
///
/// Rows smaller than the base (`numerator < denominator`) are discarded
/// first. A material passes when its remaining numerators and denominators
/// sum to the same total, unless it is exempt: base weight at or above the
/// heavy threshold, base unit already a case, or an exempt product category.
pub(super) fn missing_alternate_uom<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
    config: &AuditConfig,
) -> Vec<Flagged<'a>> {
    let kept: Vec<_> = reference
        .join(rows)
        .filter(|(row, _)| {
            matches!(
                (row.conversion_numerator, row.conversion_denominator),
                (Some(n), Some(d)) if n >= d
            )
        })
        .collect();

    let mut exempt: BTreeSet<&str> = BTreeSet::new();
    let mut sums: BTreeMap<&str, (i128, i128)> = BTreeMap::new();
    for &(row, base) in &kept {
        let material_number = row.material_number.as_str();
        let heavy = base
            .base_gross_weight
            .is_some_and(|weight| weight >= config.heavy_base_weight);
        if heavy
            || row.base_uom == config.case_uom
            || config.is_exempt_category(row.product_category.as_deref())
        {
            exempt.insert(material_number);
        }

        let entry = sums.entry(material_number).or_default();
        entry.0 += i128::from(row.conversion_numerator.unwrap_or_default());
        entry.1 += i128::from(row.conversion_denominator.unwrap_or_default());
    }

    let without_alternate: BTreeSet<&str> = sums
        .into_iter()
        .filter(|(material_number, (numerators, denominators))| {
            numerators == denominators && !exempt.contains(material_number)
        })
        .map(|(material_number, _)| material_number)
        .collect();

    kept.into_iter()
        .filter(|(row, _)| {
            row.is_base() && without_alternate.contains(row.material_number.as_str())
        })
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

/// Alternate levels larger or heavier than the base but with numerator 1.
pub(super) fn invalid_numerator<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Vec<Flagged<'a>> {
    reference
        .join(rows.iter().filter(|row| row.is_alternate()))
        .filter(|(row, base)| {
            let larger = matches!((row.volume, base.base_volume), (Some(v), Some(b)) if v > b);
            let heavier = matches!(
                (row.gross_weight, base.base_gross_weight),
                (Some(w), Some(b)) if w > b
            );
            (larger || heavier) && row.conversion_numerator == Some(1)
        })
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

//! Gross weight checks.

use uom_model::MaterialUomRow;

use super::{is_blank_or_zero, is_packaging_level};
use crate::config::AuditConfig;
use crate::format::Flagged;
use crate::reference::BaseReference;

/// Packaging levels without a usable gross weight.
pub(super) fn missing_weight(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    rows.iter()
        .filter(|row| is_packaging_level(row) && is_blank_or_zero(row.gross_weight))
        .map(Flagged::row)
        .collect()
}

/// Sub-base levels heavier than their share of the base weight
/// (`base_weight / denominator`).
pub(super) fn smaller_weight_tolerance<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Vec<Flagged<'a>> {
    reference
        .join(rows.iter().filter(|row| row.is_alternate() && row.denominator_above(1)))
        .filter(|(row, base)| {
            match (row.gross_weight, base.base_gross_weight, row.conversion_denominator) {
                (Some(weight), Some(base_weight), Some(denominator)) => {
                    weight > base_weight / denominator as f64
                }
                _ => false,
            }
        })
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

/// Packaging levels whose weight deviates from `base_weight * numerator`
/// beyond the configured tolerance band.
pub(super) fn larger_weight_tolerance<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
    config: &AuditConfig,
) -> Vec<Flagged<'a>> {
    let tolerance = config.weight_tolerance;
    reference
        .join(rows.iter().filter(|row| is_packaging_level(row)))
        .filter(|(row, base)| {
            match (row.gross_weight, base.base_gross_weight, row.conversion_numerator) {
                (Some(weight), Some(base_weight), Some(numerator)) => {
                    let calculated = base_weight * numerator as f64;
                    tolerance.is_outside((weight - calculated) / calculated)
                }
                _ => false,
            }
        })
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

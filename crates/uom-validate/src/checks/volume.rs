//! Volume checks across packaging levels.

use std::collections::BTreeMap;

use uom_model::MaterialUomRow;

use super::{is_blank_or_zero, is_packaging_level};
use crate::config::AuditConfig;
use crate::format::Flagged;
use crate::reference::BaseReference;

/// Packaging levels without a usable volume.
///
/// Small levels can legitimately round to zero cubic feet, which is still
/// reported.
pub(super) fn missing_volume(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    rows.iter()
        .filter(|row| is_packaging_level(row) && is_blank_or_zero(row.volume))
        .map(Flagged::row)
        .collect()
}

/// Sub-base levels (`denominator > 1`) at least as large as the base unit.
pub(super) fn smaller_alt_volume<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Vec<Flagged<'a>> {
    reference
        .join(rows.iter().filter(|row| row.is_alternate() && row.denominator_above(1)))
        .filter(|(row, base)| matches!((row.volume, base.base_volume), (Some(v), Some(b)) if v >= b))
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

/// Packaging levels whose volume does not grow over the next-smaller level.
///
/// Levels of a material are ordered by numerator (stable, so ties keep input
/// order) and compared pairwise; a pair with a null volume is skipped.
/// Materials without a base row are not evaluated. Flagged rows are
/// returned in input order.
pub(super) fn larger_alt_volume<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Vec<Flagged<'a>> {
    let mut levels: BTreeMap<&str, Vec<(usize, &MaterialUomRow)>> = BTreeMap::new();
    for (idx, row) in rows
        .iter()
        .enumerate()
        .filter(|(_, row)| is_packaging_level(row) && reference.has_base(&row.material_number))
    {
        levels
            .entry(row.material_number.as_str())
            .or_default()
            .push((idx, row));
    }

    let mut flagged_idx = Vec::new();
    for chain in levels.values_mut() {
        chain.sort_by_key(|(_, row)| row.conversion_numerator);
        for pair in chain.windows(2) {
            let (_, lower) = pair[0];
            let (idx, upper) = pair[1];
            if let (Some(lower_volume), Some(upper_volume)) = (lower.volume, upper.volume)
                && upper_volume <= lower_volume
            {
                flagged_idx.push(idx);
            }
        }
    }
    flagged_idx.sort_unstable();

    flagged_idx
        .into_iter()
        .map(|idx| Flagged::row(&rows[idx]))
        .collect()
}

/// Pallets far larger than their cases stacked.
///
/// Applies to materials with exactly two case/pallet rows. Each pallet row
/// is paired with each case row; the expected pallet volume is
/// `pallet_numerator / case_numerator * case_volume`, and the pallet is
/// flagged when `(pallet_volume - expected) / expected` exceeds the
/// configured threshold. Materials without a base row are not evaluated.
pub(super) fn pallet_volume<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
    config: &AuditConfig,
) -> Vec<Flagged<'a>> {
    let case_uom = config.case_uom.as_str();
    let pallet_uom = config.pallet_uom.as_str();

    let mut levels: BTreeMap<&str, Vec<&MaterialUomRow>> = BTreeMap::new();
    for row in rows.iter().filter(|row| {
        (row.alt_uom == case_uom || row.alt_uom == pallet_uom)
            && reference.has_base(&row.material_number)
    }) {
        levels
            .entry(row.material_number.as_str())
            .or_default()
            .push(row);
    }

    let mut flagged = Vec::new();
    for pallet in rows.iter().filter(|row| row.alt_uom == pallet_uom) {
        let Some(material_levels) = levels.get(pallet.material_number.as_str()) else {
            continue;
        };
        if material_levels.len() != 2 {
            continue;
        }
        for case in material_levels.iter().filter(|row| row.alt_uom == case_uom) {
            if pallet_exceeds(pallet, case, config.pallet_volume_threshold) {
                flagged.push(Flagged::row(pallet));
            }
        }
    }
    flagged
}

fn pallet_exceeds(pallet: &MaterialUomRow, case: &MaterialUomRow, threshold: f64) -> bool {
    let (Some(pallet_num), Some(case_num)) = (pallet.conversion_numerator, case.conversion_numerator)
    else {
        return false;
    };
    if pallet_num <= 1 || case_num <= 1 || pallet_num <= case_num {
        return false;
    }
    let (Some(pallet_volume), Some(case_volume)) = (pallet.volume, case.volume) else {
        return false;
    };

    let cases_on_pallet = pallet_num as f64 / case_num as f64;
    let expected = cases_on_pallet * case_volume;
    let deviation = (pallet_volume - expected) / expected;
    deviation > threshold
}

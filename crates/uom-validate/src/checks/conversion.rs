//! Conversion ratio checks.

use std::collections::{BTreeMap, BTreeSet};

use uom_model::MaterialUomRow;

use crate::error::RuleError;
use crate::format::Flagged;
use crate::reference::BaseReference;

fn blank_or_zero(value: Option<i64>) -> bool {
    value.is_none_or(|v| v == 0)
}

/// Any row with a missing or zero numerator.
pub(super) fn blank_numerator(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    rows.iter()
        .filter(|row| blank_or_zero(row.conversion_numerator))
        .map(Flagged::row)
        .collect()
}

/// Any row with a missing or zero denominator.
pub(super) fn blank_denominator(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    rows.iter()
        .filter(|row| blank_or_zero(row.conversion_denominator))
        .map(Flagged::row)
        .collect()
}

/// Alternate levels sharing `(numerator, denominator)` with another level of
/// the same material. Rows with a null ratio part never match.
pub(super) fn duplicate_alt_uoms(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    let mut counts: BTreeMap<(&str, i64, i64), usize> = BTreeMap::new();
    for key in rows.iter().filter_map(ratio_key) {
        *counts.entry(key).or_default() += 1;
    }

    rows.iter()
        .filter(|&row| {
            ratio_key(row)
                .and_then(|key| counts.get(&key))
                .is_some_and(|count| *count > 1)
        })
        .map(Flagged::row)
        .collect()
}

fn ratio_key(row: &MaterialUomRow) -> Option<(&str, i64, i64)> {
    match (row.conversion_numerator, row.conversion_denominator) {
        (Some(n), Some(d)) if row.is_alternate() => Some((row.material_number.as_str(), n, d)),
        _ => None,
    }
}

/// Every row of a material whose multi-unit numerators do not divide each
/// other down the chain.
///
/// Levels with `numerator > denominator` are sorted by numerator descending
/// and each consecutive pair must divide evenly. Materials without a base
/// row are not evaluated. A zero divisor is a data error that fails the rule.
pub(super) fn non_divisible_conversion<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Result<Vec<Flagged<'a>>, RuleError> {
    let mut numerators: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for row in rows
        .iter()
        .filter(|row| row.is_alternate() && reference.has_base(&row.material_number))
    {
        if let (Some(n), Some(d)) = (row.conversion_numerator, row.conversion_denominator)
            && n > d
        {
            numerators
                .entry(row.material_number.as_str())
                .or_default()
                .push(n);
        }
    }

    let mut failing = BTreeSet::new();
    for (material_number, mut chain) in numerators {
        chain.sort_unstable_by(|a, b| b.cmp(a));
        if !chain_divides(material_number, &chain)? {
            failing.insert(material_number);
        }
    }

    Ok(rows
        .iter()
        .filter(|row| failing.contains(row.material_number.as_str()))
        .map(Flagged::row)
        .collect())
}

/// True when each numerator of a descending chain divides by the next one.
fn chain_divides(material_number: &str, chain: &[i64]) -> Result<bool, RuleError> {
    for pair in chain.windows(2) {
        let (larger, smaller) = (pair[0], pair[1]);
        if smaller == 0 {
            return Err(RuleError::ZeroDivisor {
                material_number: material_number.to_string(),
            });
        }
        let remainder = larger
            .checked_rem(smaller)
            .ok_or_else(|| RuleError::Overflow {
                material_number: material_number.to_string(),
            })?;
        if remainder != 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Alternate levels with `numerator == denominator > 1`.
pub(super) fn redundant_conversion(rows: &[MaterialUomRow]) -> Vec<Flagged<'_>> {
    rows.iter()
        .filter(|row| row.is_equivalent_alternate() && row.numerator_above(1))
        .map(Flagged::row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixtures::{alt, base, keys};

    fn chain_check(rows: &[MaterialUomRow]) -> Result<Vec<String>, RuleError> {
        non_divisible_conversion(rows, &BaseReference::extract(rows)).map(|flagged| keys(&flagged))
    }

    #[test]
    fn blank_checks_cover_base_rows() {
        let rows = vec![
            MaterialUomRow::new("1001", "EA", "EA", None, Some(1)),
            MaterialUomRow::new("1001", "EA", "CS", Some(12), Some(0)),
            alt("1002", "CS", 0, 1),
        ];
        assert_eq!(keys(&blank_numerator(&rows)), vec!["1001 - EA", "1002 - CS"]);
        assert_eq!(keys(&blank_denominator(&rows)), vec!["1001 - CS"]);
    }

    #[test]
    fn duplicate_ratios_flag_every_member_in_input_order() {
        let rows = vec![
            base("1001"),
            alt("1001", "CS", 12, 1),
            alt("1001", "IP", 6, 1),
            alt("1001", "BX", 12, 1),
            alt("1002", "CS", 12, 1),
        ];
        assert_eq!(
            keys(&duplicate_alt_uoms(&rows)),
            vec!["1001 - CS", "1001 - BX"]
        );
    }

    #[test]
    fn duplicate_ratios_ignore_nulls() {
        let rows = vec![
            MaterialUomRow::new("1001", "EA", "CS", Some(12), None),
            MaterialUomRow::new("1001", "EA", "BX", Some(12), None),
        ];
        assert!(duplicate_alt_uoms(&rows).is_empty());
    }

    #[test]
    fn divisible_chain_passes() {
        let rows = vec![base("1001"), alt("1001", "IP", 5, 1), alt("1001", "CS", 25, 1)];
        assert!(chain_check(&rows).unwrap().is_empty());
    }

    #[test]
    fn broken_chain_flags_all_rows_of_material() {
        let rows = vec![
            base("1001"),
            alt("1001", "IP", 5, 1),
            alt("1001", "CS", 12, 1),
            base("1002"),
            alt("1002", "CS", 7, 1),
        ];
        assert_eq!(
            chain_check(&rows).unwrap(),
            vec!["1001 - EA", "1001 - IP", "1001 - CS"]
        );
    }

    #[test]
    fn chain_without_base_row_is_not_evaluated() {
        let rows = vec![
            alt("2001", "IP", 5, 1),
            alt("2001", "CS", 12, 1),
            alt("2001", "PAL", 480, 1),
        ];
        assert!(chain_check(&rows).unwrap().is_empty());
    }

    #[test]
    fn zero_divisor_fails_rule() {
        let rows = vec![base("1001"), alt("1001", "CS", 5, 1), alt("1001", "XX", 0, -1)];
        let err = chain_check(&rows).unwrap_err();
        assert_eq!(
            err,
            RuleError::ZeroDivisor {
                material_number: "1001".to_string()
            }
        );
    }

    #[test]
    fn redundant_conversion_requires_value_above_one() {
        let rows = vec![
            base("1001"),
            alt("1001", "IP", 1, 1),
            alt("1001", "CS", 6, 6),
            alt("1001", "BX", 6, 1),
        ];
        assert_eq!(keys(&redundant_conversion(&rows)), vec!["1001 - CS"]);
    }
}

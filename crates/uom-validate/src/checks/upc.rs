//! UPC/GTIN checks.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use uom_model::{DuplicateUpcRow, MaterialUomRow};

use crate::config::AuditConfig;
use crate::format::Flagged;
use crate::reference::BaseReference;

/// GTIN-8, UPC-A (GTIN-12), EAN-13 and GTIN-14.
static GTIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{8}$|^\d{12}$|^\d{13}$|^\d{14}$").expect("Invalid GTIN regex")
});

/// True when the UPC has one of the accepted GTIN lengths.
fn is_valid_gtin(upc: &str) -> bool {
    GTIN_REGEX.is_match(upc)
}

/// Levels that need their own barcode: anything but pallets and 1:1 alternates.
fn requires_upc(row: &MaterialUomRow, config: &AuditConfig) -> bool {
    row.alt_uom != config.pallet_uom && !row.is_equivalent_alternate()
}

/// 1:1 alternates carrying a UPC different from the base UPC.
///
/// Only materials with more than one 1:1 row carrying a UPC are considered.
/// Alternates are compared with each base row; a base row without a UPC
/// matches nothing.
pub(super) fn conversion_by_upc<'a>(
    rows: &'a [MaterialUomRow],
    reference: &BaseReference<'a>,
) -> Vec<Flagged<'a>> {
    let candidates: Vec<&MaterialUomRow> = rows
        .iter()
        .filter(|row| {
            row.conversion_numerator == Some(1)
                && row.conversion_denominator == Some(1)
                && row.upc.is_some()
        })
        .collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &candidates {
        *counts.entry(row.material_number.as_str()).or_default() += 1;
    }

    reference
        .join(candidates.into_iter().filter(|row| {
            counts
                .get(row.material_number.as_str())
                .is_some_and(|count| *count > 1)
        }))
        .filter(|(row, base)| match (row.upc.as_deref(), base.base_upc) {
            (Some(upc), Some(base_upc)) => row.is_alternate() && upc != base_upc,
            _ => false,
        })
        .map(|(row, _)| Flagged::row(row))
        .collect()
}

/// UPCs present but not shaped like a GTIN.
pub(super) fn invalid_gtin<'a>(
    rows: &'a [MaterialUomRow],
    config: &AuditConfig,
) -> Vec<Flagged<'a>> {
    rows.iter()
        .filter(|row| {
            row.upc.as_deref().is_some_and(|upc| !is_valid_gtin(upc)) && requires_upc(row, config)
        })
        .map(Flagged::row)
        .collect()
}

/// Levels without any UPC.
pub(super) fn upc_required<'a>(
    rows: &'a [MaterialUomRow],
    config: &AuditConfig,
) -> Vec<Flagged<'a>> {
    rows.iter()
        .filter(|row| row.upc.is_none() && requires_upc(row, config))
        .map(Flagged::row)
        .collect()
}

/// Rows whose `(material, uom)` shares a UPC with other entries of the corpus.
///
/// The listing is grouped by UPC in ascending order. Each row gets one issue
/// per UPC it is listed under, with a message naming every colliding key:
/// `Duplicate UPC {'<upc>': ['<material> - <uom>', ...]}`.
pub(super) fn duplicate_upc<'a>(
    rows: &'a [MaterialUomRow],
    duplicates: &[DuplicateUpcRow],
) -> Vec<Flagged<'a>> {
    let mut by_upc: BTreeMap<&str, Vec<&DuplicateUpcRow>> = BTreeMap::new();
    for entry in duplicates {
        by_upc.entry(entry.upc.as_str()).or_default().push(entry);
    }

    let mut by_key: BTreeMap<(&str, &str), Vec<String>> = BTreeMap::new();
    for (upc, entries) in &by_upc {
        let message = collision_message(upc, entries);
        for entry in entries {
            by_key
                .entry((entry.material_number.as_str(), entry.alt_uom.as_str()))
                .or_default()
                .push(message.clone());
        }
    }

    let mut flagged = Vec::new();
    for row in rows {
        let key = (row.material_number.as_str(), row.alt_uom.as_str());
        if let Some(messages) = by_key.get(&key) {
            flagged.extend(
                messages
                    .iter()
                    .map(|message| Flagged::with_message(row, message.as_str())),
            );
        }
    }
    flagged
}

fn collision_message(upc: &str, entries: &[&DuplicateUpcRow]) -> String {
    let keys = entries
        .iter()
        .map(|entry| format!("'{}'", entry.key()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Duplicate UPC {{'{upc}': [{keys}]}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixtures::{alt, base, keys};

    fn with_upc(mut row: MaterialUomRow, upc: Option<&str>) -> MaterialUomRow {
        row.upc = upc.map(str::to_string);
        row
    }

    #[test]
    fn gtin_lengths() {
        assert!(is_valid_gtin("12345678"));
        assert!(is_valid_gtin("012345678905"));
        assert!(is_valid_gtin("0012345678905"));
        assert!(is_valid_gtin("10012345678902"));
        assert!(!is_valid_gtin("123456789"));
        assert!(!is_valid_gtin("1234567A"));
        assert!(!is_valid_gtin(""));
    }

    #[test]
    fn invalid_gtin_skips_pallets_and_equivalents() {
        let config = AuditConfig::default();
        let rows = vec![
            with_upc(base("1001"), Some("12345678")),
            with_upc(alt("1001", "CS", 12, 1), Some("123456789")),
            with_upc(alt("1001", "IP", 1, 1), Some("123456789")),
            with_upc(alt("1001", "PAL", 480, 1), Some("123")),
            with_upc(base("1002"), Some("ABC")),
        ];
        assert_eq!(
            keys(&invalid_gtin(&rows, &config)),
            vec!["1001 - CS", "1002 - EA"]
        );
    }

    #[test]
    fn upc_required_for_package_levels() {
        let config = AuditConfig::default();
        let rows = vec![
            with_upc(base("1001"), None),
            with_upc(alt("1001", "IP", 1, 1), None),
            with_upc(alt("1001", "CS", 12, 1), None),
            with_upc(alt("1001", "PAL", 480, 1), None),
            MaterialUomRow::new("1001", "EA", "BX", Some(24), None),
        ];
        assert_eq!(
            keys(&upc_required(&rows, &config)),
            vec!["1001 - EA", "1001 - CS", "1001 - BX"]
        );
    }

    #[test]
    fn one_to_one_with_foreign_upc() {
        let rows = vec![
            with_upc(base("1001"), Some("00000000000001")),
            with_upc(alt("1001", "IP", 1, 1), Some("00000000000002")),
            with_upc(alt("1001", "EA2", 1, 1), Some("00000000000001")),
            with_upc(base("1002"), None),
            with_upc(alt("1002", "IP", 1, 1), Some("00000000000003")),
            with_upc(alt("1002", "EA2", 1, 1), Some("00000000000004")),
            with_upc(base("1003"), Some("00000000000005")),
            with_upc(alt("1003", "IP", 1, 1), Some("00000000000006")),
        ];
        let reference = BaseReference::extract(&rows);
        assert_eq!(
            keys(&conversion_by_upc(&rows, &reference)),
            vec!["1001 - IP", "1003 - IP"]
        );
    }

    #[test]
    fn duplicate_upc_messages_list_collisions() {
        let rows = vec![
            base("1001"),
            alt("1001", "CS", 12, 1),
            base("1002"),
        ];
        let duplicates = vec![
            DuplicateUpcRow::new("0002", "1001", "CS"),
            DuplicateUpcRow::new("0001", "1001", "EA"),
            DuplicateUpcRow::new("0001", "1002", "EA"),
            DuplicateUpcRow::new("0002", "9999", "CS"),
            DuplicateUpcRow::new("0003", "1001", "CS"),
            DuplicateUpcRow::new("0003", "1001", "PK"),
        ];

        let flagged = duplicate_upc(&rows, &duplicates);
        let messages: Vec<(String, &str)> = flagged
            .iter()
            .map(|item| (item.row.key(), item.message.as_deref().unwrap_or_default()))
            .collect();

        assert_eq!(
            messages,
            vec![
                (
                    "1001 - EA".to_string(),
                    "Duplicate UPC {'0001': ['1001 - EA', '1002 - EA']}"
                ),
                (
                    "1001 - CS".to_string(),
                    "Duplicate UPC {'0002': ['1001 - CS', '9999 - CS']}"
                ),
                (
                    "1001 - CS".to_string(),
                    "Duplicate UPC {'0003': ['1001 - CS', '1001 - PK']}"
                ),
                (
                    "1002 - EA".to_string(),
                    "Duplicate UPC {'0001': ['1001 - EA', '1002 - EA']}"
                ),
            ]
        );
    }

    #[test]
    fn duplicate_upc_with_empty_listing() {
        let rows = vec![base("1001")];
        assert!(duplicate_upc(&rows, &[]).is_empty());
    }
}

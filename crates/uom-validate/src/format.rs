//! Projection of flagged rows onto the issue-repository schema.

use chrono::NaiveDate;

use uom_model::{IssueRecord, MaterialUomRow};

/// One row selected by a rule, optionally with a row-specific message.
#[derive(Debug, Clone, PartialEq)]
pub struct Flagged<'a> {
    pub row: &'a MaterialUomRow,
    pub message: Option<String>,
}

impl<'a> Flagged<'a> {
    /// Flag a row with the rule's default message.
    pub fn row(row: &'a MaterialUomRow) -> Self {
        Self { row, message: None }
    }

    pub fn with_message(row: &'a MaterialUomRow, message: impl Into<String>) -> Self {
        Self {
            row,
            message: Some(message.into()),
        }
    }
}

/// Labels stamped on every issue produced by one rule.
#[derive(Debug, Clone, Copy)]
pub struct IssueLabels<'a> {
    pub issue_category: &'a str,
    pub issue_code: &'a str,
    pub default_message: &'a str,
}

/// Stamp flagged rows with the rule's labels and today's date, preserving order.
///
/// An empty input yields an empty vector.
pub fn format_issues(
    flagged: &[Flagged<'_>],
    labels: IssueLabels<'_>,
    today: NaiveDate,
) -> Vec<IssueRecord> {
    flagged
        .iter()
        .map(|item| IssueRecord {
            material_number: item.row.material_number.clone(),
            alt_uom: item.row.alt_uom.clone(),
            date_discovered: today,
            date_resolved: None,
            issue_category: labels.issue_category.to_string(),
            issue_code: labels.issue_code.to_string(),
            error_message: item
                .message
                .clone()
                .unwrap_or_else(|| labels.default_message.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: IssueLabels<'static> = IssueLabels {
        issue_category: "SUPPLY_CHAIN",
        issue_code: "MISSING_VOLUME",
        default_message: "Volume should not be blank for AUOM with Numerator > 1.",
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn empty_input_formats_to_empty_output() {
        assert!(format_issues(&[], LABELS, today()).is_empty());
    }

    #[test]
    fn rows_keep_order_and_labels() {
        let case = MaterialUomRow::new("1001", "EA", "CS", Some(12), Some(1));
        let pallet = MaterialUomRow::new("1000", "EA", "PAL", Some(480), Some(1));
        let flagged = vec![
            Flagged::row(&case),
            Flagged::with_message(&pallet, "custom"),
        ];

        let records = format_issues(&flagged, LABELS, today());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].material_number, "1001");
        assert_eq!(records[0].error_message, LABELS.default_message);
        assert_eq!(records[0].date_resolved, None);
        assert_eq!(records[0].date_discovered, today());
        assert_eq!(records[1].alt_uom, "PAL");
        assert_eq!(records[1].error_message, "custom");
        assert_eq!(records[1].issue_code, "MISSING_VOLUME");
    }
}

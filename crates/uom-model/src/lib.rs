pub mod issue;
pub mod material;

pub use issue::{ISSUE_COLUMNS, IssueRecord, IssueReport, RuleFailure, RuleOutcome};
pub use material::{DuplicateUpcRow, MaterialUomRow, uom_key};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(material: &str, code: &str) -> IssueRecord {
        IssueRecord {
            material_number: material.to_string(),
            alt_uom: "CS".to_string(),
            date_discovered: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            date_resolved: None,
            issue_category: "SUPPLY_CHAIN".to_string(),
            issue_code: code.to_string(),
            error_message: "message".to_string(),
        }
    }

    #[test]
    fn issue_report_counts() {
        let report = IssueReport {
            records: vec![
                record("1001", "MISSING_VOLUME"),
                record("1001", "MISSING_WEIGHT"),
                record("1002", "MISSING_VOLUME"),
            ],
            outcomes: vec![],
            failures: vec![],
        };
        assert_eq!(report.len(), 3);
        assert_eq!(report.count_for_code("MISSING_VOLUME"), 2);
        assert_eq!(report.flagged_material_count(), 2);
        assert!(!report.has_failures());
    }

    #[test]
    fn record_serializes_dates_as_iso() {
        let json = serde_json::to_value(record("1001", "NO_UPC")).expect("serialize record");
        assert_eq!(json["date_discovered"], "2025-07-01");
        assert!(json["date_resolved"].is_null());
    }
}

//! Tests for uom-model types.

use chrono::NaiveDate;
use uom_model::{
    ISSUE_COLUMNS, IssueRecord, IssueReport, MaterialUomRow, RuleFailure, RuleOutcome,
};

#[test]
fn issue_columns_follow_record_field_order() {
    let record = IssueRecord {
        material_number: "1001".to_string(),
        alt_uom: "CS".to_string(),
        date_discovered: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        date_resolved: None,
        issue_category: "SUPPLY_CHAIN".to_string(),
        issue_code: "NO_UPC".to_string(),
        error_message: "Valid UPC/GTIN is required for all valid package levels.".to_string(),
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let mut last = 0;
    for column in ISSUE_COLUMNS {
        let position = json
            .find(&format!("\"{column}\""))
            .unwrap_or_else(|| panic!("column {column} missing"));
        assert!(position >= last, "column {column} out of order");
        last = position;
    }
}

#[test]
fn report_round_trips_through_json() {
    let report = IssueReport {
        records: vec![],
        outcomes: vec![RuleOutcome {
            rule: "non_divisible_conversion".to_string(),
            issue_code: "NON_DIVISIBLE_CONVERSION".to_string(),
            flagged: 0,
            failed: true,
        }],
        failures: vec![RuleFailure {
            rule: "non_divisible_conversion".to_string(),
            issue_code: "NON_DIVISIBLE_CONVERSION".to_string(),
            message: "zero conversion numerator for material 1001".to_string(),
        }],
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: IssueReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
    assert!(round.has_failures());
    assert!(round.is_empty());
}

#[test]
fn material_row_deserializes_with_nulls() {
    let json = r#"{
        "material_number": "1001",
        "product_category": null,
        "base_uom": "EA",
        "alt_uom": "CS",
        "conversion_numerator": 12,
        "conversion_denominator": 1,
        "upc": null,
        "length": 10.0,
        "width": null,
        "height": 4.5,
        "volume": 0.26,
        "gross_weight": 14.2
    }"#;
    let row: MaterialUomRow = serde_json::from_str(json).expect("deserialize row");
    assert!(row.is_alternate());
    assert_eq!(row.dimensions(), [Some(10.0), None, Some(4.5)]);
    assert!(row.numerator_above(1));
}

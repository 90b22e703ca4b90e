//! CSV output in the issue repository's column order.

use std::io::Write;

use uom_model::{ISSUE_COLUMNS, IssueRecord};

use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write a header row and one line per record.
///
/// Dates use `YYYY-MM-DD`; an unresolved issue has an empty `date_resolved`.
pub fn write_issues_csv<W: Write>(writer: W, records: &[IssueRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(ISSUE_COLUMNS)?;

    for record in records {
        let date_discovered = record.date_discovered.format(DATE_FORMAT).to_string();
        let date_resolved = record
            .date_resolved
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        wtr.write_record([
            record.material_number.as_str(),
            record.alt_uom.as_str(),
            date_discovered.as_str(),
            date_resolved.as_str(),
            record.issue_category.as_str(),
            record.issue_code.as_str(),
            record.error_message.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_report_still_has_header() {
        let mut buffer = Vec::new();
        write_issues_csv(&mut buffer, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "material_number,alt_uom,date_discovered,date_resolved,issue_category,issue_code,error_message\n"
        );
    }

    #[test]
    fn resolved_date_is_written_when_present() {
        let record = IssueRecord {
            material_number: "1001".to_string(),
            alt_uom: "CS".to_string(),
            date_discovered: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            date_resolved: NaiveDate::from_ymd_opt(2025, 7, 9),
            issue_category: "SUPPLY_CHAIN".to_string(),
            issue_code: "NO_UPC".to_string(),
            error_message: "Valid UPC/GTIN is required for all valid package levels.".to_string(),
        };
        let mut buffer = Vec::new();
        write_issues_csv(&mut buffer, &[record]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("1001,CS,2025-07-01,2025-07-09,"));
    }
}

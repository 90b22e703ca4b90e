//! Schema-tagged JSON report.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use uom_model::{IssueRecord, IssueReport, RuleFailure};

use crate::error::Result;

pub const REPORT_SCHEMA: &str = "uom-audit.issue-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct IssueReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub issues: &'a [IssueRecord],
    pub failures: &'a [RuleFailure],
}

impl<'a> IssueReportPayload<'a> {
    pub fn new(report: &'a IssueReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: generated_at.to_rfc3339(),
            issues: &report.records,
            failures: &report.failures,
        }
    }
}

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_report_json<W: Write>(
    mut writer: W,
    report: &IssueReport,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let payload = IssueReportPayload::new(report, generated_at);
    serde_json::to_writer_pretty(&mut writer, &payload)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

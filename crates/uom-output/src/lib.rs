//! Issue report output.
//!
//! - **CSV**: the seven-column issue table consumed by the issue repository
//! - **JSON**: a schema-tagged document carrying issues and rule failures
//! - **Sinks**: the [`IssueSink`] trait with writer, file and stdout destinations

mod csv_sink;
mod error;
mod json;
mod sink;

pub use csv_sink::write_issues_csv;
pub use error::{OutputError, Result};
pub use json::{IssueReportPayload, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_report_json};
pub use sink::{FileSink, IssueSink, OutputFormat, StdoutSink, WriterSink};

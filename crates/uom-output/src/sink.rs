//! Report destinations.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::info;

use uom_model::IssueReport;

use crate::csv_sink::write_issues_csv;
use crate::error::{OutputError, Result};
use crate::json::write_report_json;

/// Serialization of an issue report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Flat issue table for the issue repository.
    #[default]
    Csv,
    /// Issues and rule failures in one schema-tagged document.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

/// Destination for an assembled issue report.
pub trait IssueSink {
    fn write_report(&mut self, report: &IssueReport) -> Result<()>;
}

/// Sink over any writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            generated_at: Utc::now(),
        }
    }

    /// Override the JSON `generated_at` timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> IssueSink for WriterSink<W> {
    fn write_report(&mut self, report: &IssueReport) -> Result<()> {
        match self.format {
            OutputFormat::Csv => write_issues_csv(&mut self.writer, &report.records),
            OutputFormat::Json => write_report_json(&mut self.writer, report, self.generated_at),
        }
    }
}

/// Sink writing to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IssueSink for FileSink {
    fn write_report(&mut self, report: &IssueReport) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path).map_err(|source| OutputError::Create {
            path: self.path.clone(),
            source,
        })?;
        WriterSink::new(BufWriter::new(file), self.format).write_report(report)?;
        info!(
            path = %self.path.display(),
            format = %self.format,
            records = report.len(),
            "issue report written"
        );
        Ok(())
    }
}

/// Sink writing to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl IssueSink for StdoutSink {
    fn write_report(&mut self, report: &IssueReport) -> Result<()> {
        let stdout = io::stdout();
        WriterSink::new(stdout.lock(), self.format).write_report(report)
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xlsx".parse::<OutputFormat>(),
            Err(OutputError::UnknownFormat(ref f)) if f == "xlsx"
        ));
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info_span;

use uom_cli::pipeline::{ConfigOverrides, resolve_config, run_audit, write_report};
use uom_ingest::CsvSource;
use uom_model::IssueReport;
use uom_output::{FileSink, IssueSink, OutputFormat, StdoutSink};
use uom_validate::RuleEngine;

use crate::cli::{OutputFormatArg, RulesArgs, RunArgs};
use crate::summary::{catalogue_table, failure_lines, summary_table};

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), &ConfigOverrides::default())?;
    let engine = RuleEngine::new(config).context("build rule engine")?;
    println!("{}", catalogue_table(engine.rules()));
    Ok(())
}

pub fn run_audit_command(args: &RunArgs) -> Result<IssueReport> {
    let span = info_span!("run", materials = %args.materials.display());
    let _guard = span.enter();

    let overrides = ConfigOverrides {
        exempt_categories: args.exempt_categories.clone(),
        disabled_rules: args.disabled_rules.clone(),
        parallel: args.parallel,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;
    let engine = RuleEngine::new(config).context("build rule engine")?;

    let source = CsvSource::new(&args.materials, &args.duplicate_upcs);
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let report = run_audit(&source, &engine, today)?;

    let format = output_format(args.format);
    let mut sink: Box<dyn IssueSink> = match &args.output {
        Some(path) => Box::new(FileSink::new(path, format)),
        None => Box::new(StdoutSink::new(format)),
    };
    write_report(sink.as_mut(), &report)?;

    if !args.no_summary {
        let table = summary_table(&report);
        // stdout carries the report itself when no output path is given
        if args.output.is_some() {
            println!("{table}");
        } else {
            eprintln!("{table}");
        }
    }
    if report.has_failures() {
        eprintln!("Failed rules:");
        for line in failure_lines(&report) {
            eprintln!("{line}");
        }
    }
    Ok(report)
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}

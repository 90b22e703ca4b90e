//! Audit pipeline: configuration, source, engine, sink.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, trace};

use uom_ingest::MaterialSource;
use uom_model::IssueReport;
use uom_output::IssueSink;
use uom_validate::{AuditConfig, RuleEngine, RuleKind};

/// Command-line values layered over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Added to the file's exempt product categories.
    pub exempt_categories: Vec<String>,
    /// Added to the file's disabled rules.
    pub disabled_rules: Vec<String>,
    /// Forces parallel evaluation when set.
    pub parallel: bool,
}

/// Load the configuration file (or defaults) and apply overrides.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AuditConfig> {
    let mut config = match path {
        Some(path) => AuditConfig::load(path)
            .with_context(|| format!("load audit config {}", path.display()))?,
        None => AuditConfig::default(),
    };

    config
        .exempt_product_categories
        .extend(overrides.exempt_categories.iter().cloned());
    for name in &overrides.disabled_rules {
        let Some(rule) = RuleKind::parse(name) else {
            bail!("unknown rule '{name}' (run `uom-audit rules` for the catalogue)");
        };
        config.disabled_rules.push(rule.name().to_string());
    }
    config.parallel |= overrides.parallel;

    config.validate().context("validate audit config")?;
    debug!(
        exempt_categories = config.exempt_product_categories.len(),
        disabled_rules = config.disabled_rules.len(),
        parallel = config.parallel,
        "audit config resolved"
    );
    Ok(config)
}

/// Fetch both datasets and evaluate every enabled rule.
///
/// The duplicate-UPC listing is fetched first; if it cannot be loaded the
/// run stops before any rule is evaluated.
pub fn run_audit<S>(source: &S, engine: &RuleEngine, today: NaiveDate) -> Result<IssueReport>
where
    S: MaterialSource + ?Sized,
{
    let span = info_span!("pipeline", today = %today);
    let _guard = span.enter();
    let start = Instant::now();

    let duplicates = source
        .duplicate_upcs()
        .context("load duplicate UPC listing")?;
    let rows = source.material_rows().context("load material snapshot")?;

    let report = engine.run(&rows, &duplicates, today);
    for record in &report.records {
        trace!(
            material_number = %record.material_number,
            alt_uom = %record.alt_uom,
            issue_code = %record.issue_code,
            "issue"
        );
    }
    info!(
        rows = rows.len(),
        issues = report.len(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(report)
}

/// Hand the report to a sink.
pub fn write_report(sink: &mut dyn IssueSink, report: &IssueReport) -> Result<()> {
    sink.write_report(report).context("write issue report")
}

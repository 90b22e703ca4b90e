//! Report assembly.
//!
//! The engine evaluates every enabled rule against one immutable snapshot
//! and concatenates their issues in canonical rule order. A rule that fails
//! with a data error contributes no rows; it is recorded as a
//! [`RuleFailure`] and the remaining rules still run.

use std::time::Instant;

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug_span, error, info, info_span};

use uom_model::{DuplicateUpcRow, IssueRecord, IssueReport, MaterialUomRow, RuleFailure, RuleOutcome};

use crate::checks::{RuleInput, evaluate};
use crate::config::AuditConfig;
use crate::error::{ConfigError, RuleError};
use crate::format::{IssueLabels, format_issues};
use crate::reference::BaseReference;
use crate::rule::RuleKind;

/// Outcome of one rule before assembly.
struct RuleRun {
    rule: RuleKind,
    result: Result<Vec<IssueRecord>, RuleError>,
}

/// Evaluates the configured rule set against material snapshots.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: AuditConfig,
    rules: Vec<RuleKind>,
}

impl RuleEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: AuditConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = config.enabled_rules();
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Enabled rules in evaluation order.
    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    /// Run every enabled rule and assemble the report.
    ///
    /// The order of `records` is rule order, then each rule's own row order,
    /// whether rules run sequentially or in parallel.
    pub fn run(
        &self,
        rows: &[MaterialUomRow],
        duplicates: &[DuplicateUpcRow],
        today: NaiveDate,
    ) -> IssueReport {
        let audit_span = info_span!(
            "audit",
            rows = rows.len(),
            duplicate_upcs = duplicates.len(),
            rules = self.rules.len(),
            parallel = self.config.parallel
        );
        let _audit_guard = audit_span.enter();
        let audit_start = Instant::now();

        let reference = BaseReference::extract(rows);
        let input = RuleInput {
            rows,
            reference: &reference,
            duplicates,
            config: &self.config,
        };

        let runs: Vec<RuleRun> = if self.config.parallel {
            let parent = audit_span.clone();
            self.rules
                .par_iter()
                .map(|rule| parent.in_scope(|| self.run_rule(*rule, &input, today)))
                .collect()
        } else {
            self.rules
                .iter()
                .map(|rule| self.run_rule(*rule, &input, today))
                .collect()
        };

        let report = assemble(runs);
        info!(
            records = report.len(),
            materials = report.flagged_material_count(),
            failed_rules = report.failures.len(),
            duration_ms = audit_start.elapsed().as_millis(),
            "audit complete"
        );
        report
    }

    fn run_rule(&self, rule: RuleKind, input: &RuleInput<'_>, today: NaiveDate) -> RuleRun {
        let _rule_guard = debug_span!("rule", rule = rule.name()).entered();
        let start = Instant::now();
        let labels = IssueLabels {
            issue_category: &self.config.issue_category,
            issue_code: rule.issue_code(),
            default_message: rule.default_message(),
        };

        let result = evaluate(rule, input).map(|flagged| format_issues(&flagged, labels, today));
        match &result {
            Ok(records) => info!(
                rule = rule.name(),
                issue_code = rule.issue_code(),
                flagged = records.len(),
                duration_ms = start.elapsed().as_millis(),
                "rule evaluated"
            ),
            Err(err) => error!(
                rule = rule.name(),
                issue_code = rule.issue_code(),
                error = %err,
                duration_ms = start.elapsed().as_millis(),
                "rule failed"
            ),
        }
        RuleRun { rule, result }
    }
}

/// Concatenate rule runs, already in rule order, into one report.
fn assemble(runs: Vec<RuleRun>) -> IssueReport {
    let mut report = IssueReport::default();
    for RuleRun { rule, result } in runs {
        match result {
            Ok(records) => {
                report.outcomes.push(RuleOutcome {
                    rule: rule.name().to_string(),
                    issue_code: rule.issue_code().to_string(),
                    flagged: records.len(),
                    failed: false,
                });
                report.records.extend(records);
            }
            Err(err) => {
                report.outcomes.push(RuleOutcome {
                    rule: rule.name().to_string(),
                    issue_code: rule.issue_code().to_string(),
                    flagged: 0,
                    failed: true,
                });
                report.failures.push(RuleFailure {
                    rule: rule.name().to_string(),
                    issue_code: rule.issue_code().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }
    report
}

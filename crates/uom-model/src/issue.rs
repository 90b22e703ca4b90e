use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output column order expected by the issue repository.
pub const ISSUE_COLUMNS: [&str; 7] = [
    "material_number",
    "alt_uom",
    "date_discovered",
    "date_resolved",
    "issue_category",
    "issue_code",
    "error_message",
];

/// One flagged (material, UOM) pair, ready for the issue repository.
///
/// Field order matches [`ISSUE_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub material_number: String,
    pub alt_uom: String,
    pub date_discovered: NaiveDate,
    /// Always null at creation; resolution happens downstream.
    pub date_resolved: Option<NaiveDate>,
    /// Team that owns the resolution.
    pub issue_category: String,
    pub issue_code: String,
    pub error_message: String,
}

/// Result of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub issue_code: String,
    pub flagged: usize,
    pub failed: bool,
}

/// A rule that raised a data error and contributed no rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    pub rule: String,
    pub issue_code: String,
    pub message: String,
}

/// Assembled output of one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Issues in rule order, then in each rule's own row order.
    pub records: Vec<IssueRecord>,
    pub outcomes: Vec<RuleOutcome>,
    pub failures: Vec<RuleFailure>,
}

impl IssueReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of records carrying the given issue code.
    pub fn count_for_code(&self, issue_code: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.issue_code == issue_code)
            .count()
    }

    /// Distinct materials with at least one issue.
    pub fn flagged_material_count(&self) -> usize {
        let mut materials: Vec<&str> = self
            .records
            .iter()
            .map(|record| record.material_number.as_str())
            .collect();
        materials.sort_unstable();
        materials.dedup();
        materials.len()
    }
}

//! Packaging and logistics rules for material/UOM master data.
//!
//! - **Rules**: [`RuleKind`] catalogues the nineteen checks in report order
//! - **Reference**: [`BaseReference`] joins rows to their material's base row
//! - **Formatting**: [`format_issues`] stamps flagged rows into [`uom_model::IssueRecord`]s
//! - **Engine**: [`RuleEngine`] runs the enabled rules and assembles the report
//!
//! # Example
//!
//! ```ignore
//! use uom_validate::{AuditConfig, RuleEngine};
//!
//! let engine = RuleEngine::new(AuditConfig::default())?;
//! let report = engine.run(&rows, &duplicates, chrono::Local::now().date_naive());
//! ```

mod checks;
mod config;
mod engine;
mod error;
mod format;
mod reference;
mod rule;

pub use checks::{RuleInput, evaluate};
pub use config::{AuditConfig, WeightTolerance};
pub use engine::RuleEngine;
pub use error::{ConfigError, RuleError};
pub use format::{Flagged, IssueLabels, format_issues};
pub use reference::{BaseReference, ReferenceRow};
pub use rule::RuleKind;

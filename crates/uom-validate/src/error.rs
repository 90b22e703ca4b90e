use std::path::PathBuf;

use thiserror::Error;

/// Data error raised while evaluating a single rule.
///
/// The engine records these per rule and keeps evaluating the others.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("zero conversion numerator for material {material_number}")]
    ZeroDivisor { material_number: String },

    #[error("conversion remainder overflow for material {material_number}")]
    Overflow { material_number: String },
}

/// Invalid or unreadable audit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("weight tolerance lower bound {lower} exceeds upper bound {upper}")]
    InvertedTolerance { lower: f64, upper: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },
}

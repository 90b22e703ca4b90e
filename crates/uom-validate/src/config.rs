//! Audit configuration.
//!
//! Every field has a default, so an empty TOML file is a valid configuration:
//!
//! ```toml
//! issue_category = "SUPPLY_CHAIN"
//! exempt_product_categories = ["BULK_CHEMICAL", "FURNITURE"]
//! disabled_rules = ["pallet_volume"]
//! parallel = true
//!
//! [weight_tolerance]
//! lower = -0.05
//! upper = 0.25
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rule::RuleKind;

/// Accepted relative deviation of an alternate level's gross weight from
/// `base_weight * numerator`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTolerance {
    pub lower: f64,
    pub upper: f64,
}

impl Default for WeightTolerance {
    fn default() -> Self {
        Self {
            lower: -0.05,
            upper: 0.25,
        }
    }
}

impl WeightTolerance {
    /// True when `ratio` lies outside `[lower, upper]`. NaN is never outside.
    pub fn is_outside(&self, ratio: f64) -> bool {
        ratio > self.upper || ratio < self.lower
    }
}

/// Settings for one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Team that owns the resolution of every issue.
    pub issue_category: String,
    /// Product categories excused from the missing-alternate-UOM rule.
    pub exempt_product_categories: BTreeSet<String>,
    /// Base gross weight (lbs) at or above which a material needs no alternate level.
    pub heavy_base_weight: f64,
    pub case_uom: String,
    pub pallet_uom: String,
    /// Compared literally against `(pal_volume - expected) / expected`.
    pub pallet_volume_threshold: f64,
    pub weight_tolerance: WeightTolerance,
    /// Rule names (see [`RuleKind::name`]) to skip.
    pub disabled_rules: Vec<String>,
    /// Evaluate rules on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            issue_category: "SUPPLY_CHAIN".to_string(),
            exempt_product_categories: BTreeSet::new(),
            heavy_base_weight: 26.0,
            case_uom: "CS".to_string(),
            pallet_uom: "PAL".to_string(),
            pallet_volume_threshold: 1.2,
            weight_tolerance: WeightTolerance::default(),
            disabled_rules: Vec::new(),
            parallel: false,
        }
    }
}

impl AuditConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "audit config loaded");
        Ok(config)
    }

    /// Parse a configuration from TOML text without validating it.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject tolerance bands and thresholds that cannot be evaluated, and
    /// rule names that do not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("heavy_base_weight", self.heavy_base_weight),
            ("pallet_volume_threshold", self.pallet_volume_threshold),
            ("weight_tolerance.lower", self.weight_tolerance.lower),
            ("weight_tolerance.upper", self.weight_tolerance.upper),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let WeightTolerance { lower, upper } = self.weight_tolerance;
        if lower > upper {
            return Err(ConfigError::InvertedTolerance { lower, upper });
        }

        for name in &self.disabled_rules {
            if RuleKind::parse(name).is_none() {
                return Err(ConfigError::UnknownRule { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Rules to evaluate, in canonical order.
    pub fn enabled_rules(&self) -> Vec<RuleKind> {
        let disabled: BTreeSet<RuleKind> = self
            .disabled_rules
            .iter()
            .filter_map(|name| RuleKind::parse(name))
            .collect();
        RuleKind::all()
            .iter()
            .copied()
            .filter(|rule| !disabled.contains(rule))
            .collect()
    }

    /// True when the product category is in the exemption list.
    pub fn is_exempt_category(&self, category: Option<&str>) -> bool {
        category.is_some_and(|value| self.exempt_product_categories.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AuditConfig::from_toml_str("").unwrap();
        assert_eq!(config, AuditConfig::default());
        assert_eq!(config.enabled_rules().len(), 19);
    }

    #[test]
    fn partial_tolerance_keeps_other_bound() {
        let config = AuditConfig::from_toml_str("[weight_tolerance]\nupper = 0.4\n").unwrap();
        assert_eq!(config.weight_tolerance.lower, -0.05);
        assert_eq!(config.weight_tolerance.upper, 0.4);
    }

    #[test]
    fn inverted_tolerance_is_rejected() {
        let mut config = AuditConfig::default();
        config.weight_tolerance = WeightTolerance {
            lower: 0.3,
            upper: 0.1,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedTolerance { .. })
        ));
    }

    #[test]
    fn unknown_disabled_rule_is_rejected() {
        let mut config = AuditConfig::default();
        config.disabled_rules = vec!["no_such_rule".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownRule { ref name }) if name == "no_such_rule"
        ));
    }

    #[test]
    fn disabled_rules_are_skipped_in_order() {
        let mut config = AuditConfig::default();
        config.disabled_rules = vec!["pallet_volume".to_string(), "blank_numerator".to_string()];
        let rules = config.enabled_rules();
        assert_eq!(rules.len(), 17);
        assert_eq!(rules[0], RuleKind::PackageDimensions);
        assert_eq!(rules[1], RuleKind::BlankDenominator);
        assert!(!rules.contains(&RuleKind::PalletVolume));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "issue_category = \"LOGISTICS\"\nexempt_product_categories = [\"FURNITURE\"]\nparallel = true\n"
        )
        .unwrap();

        let config = AuditConfig::load(file.path()).unwrap();
        assert_eq!(config.issue_category, "LOGISTICS");
        assert!(config.parallel);
        assert!(config.is_exempt_category(Some("FURNITURE")));
        assert!(!config.is_exempt_category(None));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AuditConfig::load(Path::new("/no/such/audit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn tolerance_band_is_inclusive() {
        let band = WeightTolerance::default();
        assert!(!band.is_outside(0.25));
        assert!(!band.is_outside(-0.05));
        assert!(band.is_outside(0.2500001));
        assert!(band.is_outside(-0.06));
        assert!(!band.is_outside(f64::NAN));
    }
}

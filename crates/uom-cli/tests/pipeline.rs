//! Integration tests for the audit pipeline.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use uom_cli::pipeline::{ConfigOverrides, resolve_config, run_audit, write_report};
use uom_ingest::{CsvSource, IngestError, MaterialSource};
use uom_model::{DuplicateUpcRow, MaterialUomRow};
use uom_output::{FileSink, OutputFormat};
use uom_validate::{AuditConfig, RuleEngine, RuleKind};

const MATERIAL_HEADER: &str = "material_number,product_category,base_uom,alt_uom,\
conversion_numerator,conversion_denominator,upc,length,width,height,volume,gross_weight";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Material 1001 is clean; material 1002's case has no gross weight.
fn snapshot(dir: &Path) -> CsvSource {
    let materials = write_file(
        dir,
        "materials.csv",
        &format!(
            "{MATERIAL_HEADER}\n\
             1001,HARDWARE,EA,EA,1,1,012345678905,2,3,4,0.014,0.5\n\
             1001,HARDWARE,EA,CS,12,1,10012345678902,10,8,6,0.28,6.4\n\
             1002,HARDWARE,EA,EA,1,1,012345678905,2,3,4,0.014,0.5\n\
             1002,HARDWARE,EA,CS,12,1,10012345678902,10,8,6,0.28,\n"
        ),
    );
    let duplicates = write_file(dir, "duplicate_upcs.csv", "upc,material_number,alt_uom\n");
    CsvSource::new(materials, duplicates)
}

#[test]
fn csv_snapshot_flows_through_engine() {
    let dir = tempfile::tempdir().unwrap();
    let source = snapshot(dir.path());
    let engine = RuleEngine::new(AuditConfig::default()).unwrap();

    let report = run_audit(&source, &engine, today()).unwrap();

    assert!(!report.has_failures());
    let missing_weight: Vec<_> = report
        .records
        .iter()
        .filter(|record| record.issue_code == RuleKind::MissingWeight.issue_code())
        .map(|record| format!("{} - {}", record.material_number, record.alt_uom))
        .collect();
    assert_eq!(missing_weight, vec!["1002 - CS"]);
    assert!(report.records.iter().all(|record| record.material_number == "1002"));
    assert!(report.records.iter().all(|record| record.date_discovered == today()));
}

#[test]
fn missing_duplicate_listing_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let materials = write_file(dir.path(), "materials.csv", &format!("{MATERIAL_HEADER}\n"));
    let source = CsvSource::new(materials, dir.path().join("absent.csv"));
    let engine = RuleEngine::new(AuditConfig::default()).unwrap();

    let err = run_audit(&source, &engine, today()).unwrap_err();
    assert_eq!(err.to_string(), "load duplicate UPC listing");
    assert!(err.downcast_ref::<IngestError>().is_some());
}

struct FailingListing {
    materials_fetched: Cell<bool>,
}

impl MaterialSource for FailingListing {
    fn material_rows(&self) -> uom_ingest::Result<Vec<MaterialUomRow>> {
        self.materials_fetched.set(true);
        Ok(Vec::new())
    }

    fn duplicate_upcs(&self) -> uom_ingest::Result<Vec<DuplicateUpcRow>> {
        Err(IngestError::DataFrame {
            message: "connection reset".to_string(),
        })
    }
}

#[test]
fn listing_is_fetched_before_the_snapshot() {
    let source = FailingListing {
        materials_fetched: Cell::new(false),
    };
    let engine = RuleEngine::new(AuditConfig::default()).unwrap();

    assert!(run_audit(&source, &engine, today()).is_err());
    assert!(!source.materials_fetched.get());
}

#[test]
fn overrides_extend_file_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_file(
        dir.path(),
        "audit.toml",
        "exempt_product_categories = [\"BULK\"]\ndisabled_rules = [\"pallet_volume\"]\n",
    );
    let overrides = ConfigOverrides {
        exempt_categories: vec!["FLUIDS".to_string()],
        disabled_rules: vec!["Duplicate-UPC".to_string()],
        parallel: true,
    };

    let config = resolve_config(Some(&config_path), &overrides).unwrap();

    assert!(config.is_exempt_category(Some("BULK")));
    assert!(config.is_exempt_category(Some("FLUIDS")));
    assert!(config.parallel);
    let rules = config.enabled_rules();
    assert_eq!(rules.len(), 17);
    assert!(!rules.contains(&RuleKind::PalletVolume));
    assert!(!rules.contains(&RuleKind::DuplicateUpc));
}

#[test]
fn unknown_rule_override_is_rejected() {
    let overrides = ConfigOverrides {
        disabled_rules: vec!["no_such_rule".to_string()],
        ..ConfigOverrides::default()
    };
    let err = resolve_config(None, &overrides).unwrap_err();
    assert!(err.to_string().contains("no_such_rule"));
}

#[test]
fn report_is_written_to_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let source = snapshot(dir.path());
    let engine = RuleEngine::new(AuditConfig::default()).unwrap();
    let report = run_audit(&source, &engine, today()).unwrap();

    let out = dir.path().join("out").join("issues.csv");
    let mut sink = FileSink::new(&out, OutputFormat::Csv);
    write_report(&mut sink, &report).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), report.len() + 1);
    assert!(written.contains("1002,CS,2025-07-01,,SUPPLY_CHAIN,MISSING_WEIGHT,"));
}

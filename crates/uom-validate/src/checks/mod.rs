//! Rule implementations.
//!
//! Each module groups the rules that inspect one aspect of a material's
//! packaging hierarchy. Every rule reads the shared snapshot and returns
//! the rows it flags in its own deterministic order.

mod alternate;
mod conversion;
mod dimensions;
mod upc;
mod volume;
mod weight;

use uom_model::{DuplicateUpcRow, MaterialUomRow};

use crate::config::AuditConfig;
use crate::error::RuleError;
use crate::format::Flagged;
use crate::reference::BaseReference;
use crate::rule::RuleKind;

/// Read-only inputs shared by every rule of a run.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub rows: &'a [MaterialUomRow],
    pub reference: &'a BaseReference<'a>,
    pub duplicates: &'a [DuplicateUpcRow],
    pub config: &'a AuditConfig,
}

/// Evaluate one rule against the snapshot.
pub fn evaluate<'a>(rule: RuleKind, input: &RuleInput<'a>) -> Result<Vec<Flagged<'a>>, RuleError> {
    let RuleInput {
        rows,
        reference,
        duplicates,
        config,
    } = *input;

    let flagged = match rule {
        RuleKind::PackageDimensions => dimensions::package_dimensions(rows),
        RuleKind::BlankNumerator => conversion::blank_numerator(rows),
        RuleKind::BlankDenominator => conversion::blank_denominator(rows),
        RuleKind::MissingVolume => volume::missing_volume(rows),
        RuleKind::SmallerAltVolume => volume::smaller_alt_volume(rows, reference),
        RuleKind::LargerAltVolume => volume::larger_alt_volume(rows, reference),
        RuleKind::MissingWeight => weight::missing_weight(rows),
        RuleKind::MissingAlternateUom => alternate::missing_alternate_uom(rows, reference, config),
        RuleKind::InvalidNumerator => alternate::invalid_numerator(rows, reference),
        RuleKind::DuplicateAltUoms => conversion::duplicate_alt_uoms(rows),
        RuleKind::NonDivisibleConversion => conversion::non_divisible_conversion(rows, reference)?,
        RuleKind::ConversionByUpc => upc::conversion_by_upc(rows, reference),
        RuleKind::RedundantConversion => conversion::redundant_conversion(rows),
        RuleKind::PalletVolume => volume::pallet_volume(rows, reference, config),
        RuleKind::SmallerWeightTolerance => weight::smaller_weight_tolerance(rows, reference),
        RuleKind::LargerWeightTolerance => weight::larger_weight_tolerance(rows, reference, config),
        RuleKind::InvalidGtin => upc::invalid_gtin(rows, config),
        RuleKind::UpcRequired => upc::upc_required(rows, config),
        RuleKind::DuplicateUpc => upc::duplicate_upc(rows, duplicates),
    };
    Ok(flagged)
}

/// Alternate level holding more than one base unit.
fn is_packaging_level(row: &MaterialUomRow) -> bool {
    row.is_alternate() && row.numerator_above(1)
}

fn is_blank_or_zero(value: Option<f64>) -> bool {
    value.is_none_or(|v| v == 0.0)
}

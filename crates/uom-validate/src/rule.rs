//! The rule catalogue.
//!
//! [`RuleKind::all`] is the canonical evaluation order and therefore the
//! order of the assembled report.

use serde::{Deserialize, Serialize};

/// One validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    PackageDimensions,
    BlankNumerator,
    BlankDenominator,
    MissingVolume,
    SmallerAltVolume,
    LargerAltVolume,
    MissingWeight,
    MissingAlternateUom,
    InvalidNumerator,
    DuplicateAltUoms,
    NonDivisibleConversion,
    ConversionByUpc,
    RedundantConversion,
    PalletVolume,
    SmallerWeightTolerance,
    LargerWeightTolerance,
    InvalidGtin,
    UpcRequired,
    DuplicateUpc,
}

impl RuleKind {
    /// All rules in canonical order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::PackageDimensions,
            Self::BlankNumerator,
            Self::BlankDenominator,
            Self::MissingVolume,
            Self::SmallerAltVolume,
            Self::LargerAltVolume,
            Self::MissingWeight,
            Self::MissingAlternateUom,
            Self::InvalidNumerator,
            Self::DuplicateAltUoms,
            Self::NonDivisibleConversion,
            Self::ConversionByUpc,
            Self::RedundantConversion,
            Self::PalletVolume,
            Self::SmallerWeightTolerance,
            Self::LargerWeightTolerance,
            Self::InvalidGtin,
            Self::UpcRequired,
            Self::DuplicateUpc,
        ]
    }

    /// 1-based position in the canonical order.
    pub fn position(self) -> usize {
        Self::all()
            .iter()
            .position(|rule| *rule == self)
            .map_or(0, |idx| idx + 1)
    }

    /// Stable snake_case name used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::PackageDimensions => "package_dimensions",
            Self::BlankNumerator => "blank_numerator",
            Self::BlankDenominator => "blank_denominator",
            Self::MissingVolume => "missing_volume",
            Self::SmallerAltVolume => "smaller_alt_volume",
            Self::LargerAltVolume => "larger_alt_volume",
            Self::MissingWeight => "missing_weight",
            Self::MissingAlternateUom => "missing_alternate_uom",
            Self::InvalidNumerator => "invalid_numerator",
            Self::DuplicateAltUoms => "duplicate_alt_uoms",
            Self::NonDivisibleConversion => "non_divisible_conversion",
            Self::ConversionByUpc => "conversion_by_upc",
            Self::RedundantConversion => "redundant_conversion",
            Self::PalletVolume => "pallet_volume",
            Self::SmallerWeightTolerance => "smaller_weight_tolerance",
            Self::LargerWeightTolerance => "larger_weight_tolerance",
            Self::InvalidGtin => "invalid_gtin",
            Self::UpcRequired => "upc_required",
            Self::DuplicateUpc => "duplicate_upc",
        }
    }

    /// Parse a rule from its snake_case name.
    pub fn parse(name: &str) -> Option<Self> {
        let needle = name.trim().to_lowercase().replace('-', "_");
        Self::all().iter().copied().find(|rule| rule.name() == needle)
    }

    /// Short code written to the issue repository.
    ///
    /// Codes are not unique: paired rules share the code of the defect they report.
    pub fn issue_code(self) -> &'static str {
        match self {
            Self::PackageDimensions => "INVALID_DIMENSIONS",
            Self::BlankNumerator => "BLANK_NUM",
            Self::BlankDenominator => "BLANK_DENOM",
            Self::MissingVolume => "MISSING_VOLUME",
            Self::SmallerAltVolume | Self::LargerAltVolume => "INVALID_VOLUME",
            Self::MissingWeight => "MISSING_WEIGHT",
            Self::MissingAlternateUom => "MISSING_AUOM",
            Self::InvalidNumerator => "INVALID_NUMERATOR",
            Self::DuplicateAltUoms => "DUPLICATE_AUOMS",
            Self::NonDivisibleConversion => "NON_DIVISIBLE_CONVERSION",
            Self::ConversionByUpc => "INVALID_CONVERSION_BY_UPC",
            Self::RedundantConversion => "INVALID_CONVERSION",
            Self::PalletVolume => "PALLET_VOLUME",
            Self::SmallerWeightTolerance | Self::LargerWeightTolerance => "WEIGHT_TOLERANCE",
            Self::InvalidGtin => "INVALID_UPC",
            Self::UpcRequired => "NO_UPC",
            Self::DuplicateUpc => "DUPLICATE_UPC",
        }
    }

    /// Message stamped on every flagged row unless the rule supplies its own.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::PackageDimensions => "Dimensions are missing or contain all default values (1)",
            Self::BlankNumerator => "Numerator cannot be blank or zero.",
            Self::BlankDenominator => "Denominator cannot be blank or zero.",
            Self::MissingVolume => "Volume should not be blank for AUOM with Numerator > 1.",
            Self::SmallerAltVolume => "Greater than or equal to volume of base unit.",
            Self::LargerAltVolume => "Less than or equal to volume of lower AUOM level.",
            Self::MissingWeight => {
                "Weight should not be blank or zero for AUOM with Numerator > 1."
            }
            Self::MissingAlternateUom => {
                "Every SKU needs an alternative unit of measure that is not a 1:1 equivalent."
            }
            Self::InvalidNumerator => {
                "Numerator should not be 1 if AUOM has greater Volume or Weight than Base UOM."
            }
            Self::DuplicateAltUoms => {
                "Numerator & Denominator for two AUOM levels should not be equal"
            }
            Self::NonDivisibleConversion => {
                "AUOM conversion numerators should be evenly divisible by each other."
            }
            Self::ConversionByUpc => {
                "Num & Denom should not both be 1 if AUOM has different UPC/GTIN value from Base UOM"
            }
            Self::RedundantConversion => {
                "Numerator & Denominator should not be equal and greater than 1."
            }
            Self::PalletVolume => {
                "Volume of PAL level should not be Greater than 120% of Expected/Calculated Volume"
            }
            Self::SmallerWeightTolerance | Self::LargerWeightTolerance => {
                "Gross weight is outside expected tolerance of calculated gross weight."
            }
            Self::InvalidGtin => "UPC failed check digit validation.",
            Self::UpcRequired => "Valid UPC/GTIN is required for all valid package levels.",
            Self::DuplicateUpc => "Duplicate UPC",
        }
    }

    /// Description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::PackageDimensions => "AUOM (numerator > 1) with missing, zero or all-1 LxWxH",
            Self::BlankNumerator => "Conversion numerator blank or zero",
            Self::BlankDenominator => "Conversion denominator blank or zero",
            Self::MissingVolume => "AUOM (numerator > 1) with blank or zero volume",
            Self::SmallerAltVolume => "AUOM (denominator > 1) not smaller than base volume",
            Self::LargerAltVolume => "AUOM volume not increasing with the next packaging level",
            Self::MissingWeight => "AUOM (numerator > 1) with blank or zero gross weight",
            Self::MissingAlternateUom => "SKU without a non 1:1 alternate UOM",
            Self::InvalidNumerator => "AUOM heavier or larger than base but numerator is 1",
            Self::DuplicateAltUoms => "Two AUOM levels with identical conversion",
            Self::NonDivisibleConversion => "AUOM numerators not evenly divisible",
            Self::ConversionByUpc => "1:1 AUOM carrying a UPC different from the base",
            Self::RedundantConversion => "AUOM with numerator = denominator > 1",
            Self::PalletVolume => "PAL volume too far above CS volume x cases per pallet",
            Self::SmallerWeightTolerance => "AUOM (denominator > 1) heavier than base share",
            Self::LargerWeightTolerance => "AUOM weight outside tolerance of base x numerator",
            Self::InvalidGtin => "UPC not an 8, 12, 13 or 14 digit GTIN",
            Self::UpcRequired => "Package level without a UPC",
            Self::DuplicateUpc => "UPC shared with another material/UOM in the corpus",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

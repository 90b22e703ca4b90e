//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions and strict numeric parsing. The strict variants
//! never coerce: text that is not a number is reported back to the caller
//! instead of being silently treated as null.

use polars::prelude::*;

/// Text values treated as null (compared case-insensitively after trimming).
const MISSING_MARKERS: [&str; 3] = ["", "null", "nan"];

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts AnyValue to a trimmed String, returning None for null or blank values.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if is_missing_text(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// True for blank text and the textual null markers exported by warehouses.
pub fn is_missing_text(value: &str) -> bool {
    let trimmed = value.trim();
    MISSING_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

/// Converts an AnyValue to f64.
///
/// Returns `Ok(None)` for null or blank values and `Err(raw)` when the value
/// is present but not numeric.
pub fn any_to_f64_strict(value: AnyValue<'_>) -> Result<Option<f64>, String> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Int8(v) => Ok(Some(f64::from(v))),
        AnyValue::Int16(v) => Ok(Some(f64::from(v))),
        AnyValue::Int32(v) => Ok(Some(f64::from(v))),
        AnyValue::Int64(v) => Ok(Some(v as f64)),
        AnyValue::UInt8(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt16(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt32(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt64(v) => Ok(Some(v as f64)),
        AnyValue::Float32(v) if v.is_nan() => Ok(None),
        AnyValue::Float32(v) => Ok(Some(f64::from(v))),
        AnyValue::Float64(v) if v.is_nan() => Ok(None),
        AnyValue::Float64(v) => Ok(Some(v)),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        other => Err(other.to_string()),
    }
}

/// Converts an AnyValue to i64.
///
/// Only integer values and integer text are accepted; `"12.0"` and float
/// cells are rejected rather than coerced.
pub fn any_to_i64_strict(value: AnyValue<'_>) -> Result<Option<i64>, String> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Int8(v) => Ok(Some(i64::from(v))),
        AnyValue::Int16(v) => Ok(Some(i64::from(v))),
        AnyValue::Int32(v) => Ok(Some(i64::from(v))),
        AnyValue::Int64(v) => Ok(Some(v)),
        AnyValue::UInt8(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt16(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt32(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt64(v) => i64::try_from(v).map(Some).map_err(|_| v.to_string()),
        AnyValue::Float32(v) => Err(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Err(format_numeric(v)),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        other => Err(other.to_string()),
    }
}

/// Parses text as f64; blank and null markers yield `Ok(None)`.
pub fn parse_f64(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if is_missing_text(trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| trimmed.to_string())
}

/// Parses text as i64; blank and null markers yield `Ok(None)`.
pub fn parse_i64(value: &str) -> Result<Option<i64>, String> {
    let trimmed = value.trim();
    if is_missing_text(trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(120.0), "120");
    }

    #[test]
    fn test_missing_markers() {
        assert!(is_missing_text(""));
        assert!(is_missing_text("  "));
        assert!(is_missing_text("NULL"));
        assert!(is_missing_text("NaN"));
        assert!(!is_missing_text("0"));
    }

    #[test]
    fn test_strict_float_parsing() {
        assert_eq!(parse_f64(" 2.5 "), Ok(Some(2.5)));
        assert_eq!(parse_f64(""), Ok(None));
        assert_eq!(parse_f64("abc"), Err("abc".to_string()));
        assert_eq!(any_to_f64_strict(AnyValue::Float64(f64::NAN)), Ok(None));
        assert_eq!(any_to_f64_strict(AnyValue::Int64(4)), Ok(Some(4.0)));
    }

    #[test]
    fn test_strict_integer_parsing() {
        assert_eq!(parse_i64("12"), Ok(Some(12)));
        assert_eq!(parse_i64("12.0"), Err("12.0".to_string()));
        assert_eq!(parse_i64("12.5"), Err("12.5".to_string()));
        assert_eq!(parse_i64("null"), Ok(None));
        assert_eq!(any_to_i64_strict(AnyValue::String("7")), Ok(Some(7)));
        assert_eq!(any_to_i64_strict(AnyValue::Float64(12.0)), Err("12".to_string()));
    }

    #[test]
    fn test_string_non_empty() {
        assert_eq!(
            any_to_string_non_empty(AnyValue::String(" 0123 ")),
            Some("0123".to_string())
        );
        assert_eq!(any_to_string_non_empty(AnyValue::Null), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("")), None);
    }
}

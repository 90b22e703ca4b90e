//! Case-insensitive column lookup.

use std::collections::HashMap;

use polars::prelude::{AnyValue, Column, DataFrame};

use crate::error::{IngestError, Result};

/// A set that performs case-insensitive lookups but preserves original names.
///
/// Warehouse exports are inconsistent about header casing (`UPC` vs `upc`),
/// so every required column is resolved through this lookup.
#[derive(Debug, Clone, Default)]
pub struct ColumnLookup {
    /// Maps lowercase name -> original name
    inner: HashMap<String, String>,
}

impl ColumnLookup {
    /// Create a lookup from an iterator of column names.
    pub fn from_names<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = HashMap::new();
        for name in iter {
            let name = name.as_ref();
            inner
                .entry(name.trim().to_lowercase())
                .or_insert_with(|| name.to_string());
        }
        Self { inner }
    }

    /// Create a lookup over a DataFrame's column names.
    pub fn from_frame(df: &DataFrame) -> Self {
        Self::from_names(df.get_column_names_owned())
    }

    /// Get the original column name (case-insensitive lookup).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Resolve a required column of `df`, failing with the table name for context.
pub(crate) fn required_column<'df>(
    df: &'df DataFrame,
    lookup: &ColumnLookup,
    table: &'static str,
    name: &str,
) -> Result<&'df Column> {
    let Some(original) = lookup.get(name) else {
        return Err(IngestError::MissingColumn {
            column: name.to_string(),
            table,
        });
    };
    Ok(df.column(original)?)
}

/// Value at `idx`, or null when the index is out of range.
pub(crate) fn value_at(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let lookup = ColumnLookup::from_names(["MATERIAL_NUMBER", "Alt_Uom", "upc"]);

        assert!(lookup.contains("material_number"));
        assert!(lookup.contains("ALT_UOM"));
        assert_eq!(lookup.get("UPC"), Some("upc"));
        assert_eq!(lookup.get("alt_uom"), Some("Alt_Uom"));
        assert!(!lookup.contains("volume"));
        assert_eq!(lookup.len(), 3);
    }
}

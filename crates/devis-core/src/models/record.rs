//! Per-page record and projected table models.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A single cell value in a page record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Free text, possibly empty.
    Text(String),
    /// A decimal amount.
    Decimal(Decimal),
    /// An integer count or sequence number.
    Integer(i64),
    /// The value was found but could not be read as a number.
    NotANumber,
    /// Nothing to write in this cell.
    #[default]
    Empty,
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// A decimal when present, `Empty` otherwise.
    pub fn from_decimal(value: Option<Decimal>) -> Self {
        value.map_or(Self::Empty, Self::Decimal)
    }

    /// True for `Empty`, `NotANumber` and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Decimal(_) | Self::Integer(_) => false,
            Self::NotANumber | Self::Empty => true,
        }
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content as `f64`, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => d.to_f64(),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Integer(i) => write!(f, "{}", i),
            Self::NotANumber | Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Decimal(d) => match d.to_f64() {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.serialize_none(),
            },
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::NotANumber | Self::Empty => serializer.serialize_none(),
        }
    }
}

/// One output row keyed by column name, built fresh for each page.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct PageRecord {
    fields: IndexMap<&'static str, FieldValue>,
}

impl PageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing any previous value.
    pub fn set(&mut self, column: &'static str, value: impl Into<FieldValue>) {
        self.fields.insert(column, value.into());
    }

    /// Value of a column, if the record carries it.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Text value of a column, or `""` when absent or non-text.
    pub fn text(&self, column: &str) -> &str {
        self.get(column).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }
}

/// Records projected onto the template columns.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Table {
    /// Column names, in template order.
    pub columns: Vec<String>,
    /// One row per page, each exactly `columns.len()` wide.
    pub rows: Vec<Vec<FieldValue>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `(row, column name)`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&FieldValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_field_value_blank() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::NotANumber.is_blank());
        assert!(FieldValue::text("").is_blank());
        assert!(!FieldValue::Integer(0).is_blank());
    }

    #[test]
    fn test_field_value_serialize() {
        let amount = FieldValue::Decimal(Decimal::from_str("1234.50").unwrap());
        assert_eq!(serde_json::to_string(&amount).unwrap(), "1234.5");
        assert_eq!(serde_json::to_string(&FieldValue::NotANumber).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FieldValue::text("a")).unwrap(), "\"a\"");
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut record = PageRecord::new();
        record.set("b", "2");
        record.set("a", "1");
        record.set("b", "3");

        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(record.text("b"), "3");
        assert_eq!(record.text("missing"), "");
    }
}

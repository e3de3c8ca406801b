//! Raw column values.
//!
//! The upstream schema is uncontrolled: columns carry arbitrary nullability,
//! mixed numeric widths, and free-form multi-value attributes. Every value a
//! driver hands over is one of the kinds below, or the column is absent.
//! Absence is modelled by the column having no entry in the row, never by a
//! null case here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One driver-native column value.
///
/// Accessors match exhaustively on the variant and treat an unexpected kind
/// as a type mismatch, never as a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawValue {
    /// Free-form text.
    Text(String),
    /// 32-bit integer, the native width of record ids and catalogue versions.
    Int32(i32),
    /// 64-bit integer.
    Int64(i64),
    /// Double-precision float.
    Double(f64),
    /// Boolean flag.
    Bool(bool),
    /// Calendar day without a time component.
    Date(NaiveDate),
    /// Ordered multi-value text attribute joined in from a side table.
    MultiText(Vec<String>),
}

/// Discriminant of a [`RawValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Int32,
    Int64,
    Double,
    Bool,
    Date,
    MultiText,
}

impl RawValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Double(_) => ValueKind::Double,
            Self::Bool(_) => ValueKind::Bool,
            Self::Date(_) => ValueKind::Date,
            Self::MultiText(_) => ValueKind::MultiText,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::MultiText => "multi-text",
        };
        f.write_str(name)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        Self::MultiText(value)
    }
}

use thiserror::Error;

use crate::value::ValueKind;

/// Failures raised by row access and catalogue resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataAccessError {
    /// The stored kind is incompatible with the requested accessor. Always a
    /// schema-drift signal, never recovered locally.
    #[error("column '{column}' holds {actual}, cannot read as {expected}")]
    TypeMismatch {
        column: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A mandatory column has no entry.
    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    /// The row carries no identity column.
    #[error("row has no 'id' column")]
    MissingIdentity,

    /// A row lookup did not yield exactly one record.
    #[error("expected one row for id {id}, found {count}")]
    NoUniqueRow { id: i32, count: usize },

    /// The process-wide property resolver was used before being bound.
    #[error("property resolver not initialized")]
    NotInitialized,

    /// No unique catalogue entry exists for a `(code, version)` pair.
    #[error("no unique catalogue entry for code '{code}' version {version}")]
    ResolutionFailed { code: String, version: i32 },
}

pub type Result<T> = std::result::Result<T, DataAccessError>;

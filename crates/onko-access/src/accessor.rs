//! Typed row access.

use chrono::{DateTime, NaiveTime, Utc};

use onko_model::{
    DataAccessError, IDENTITY_COLUMN, PARENT_COLUMN, PROPCAT_VERSION_SUFFIX, RawValue, Result,
    Row, ValueKind,
};

use crate::text::clean_text;

/// Typed, null-tolerant view over one [`Row`].
///
/// Every getter is total: a column is either absent (`None` or the
/// documented default), holds a kind coercible to the requested type, or the
/// call fails with [`DataAccessError::TypeMismatch`]. No getter substitutes
/// a default for a wrong kind.
#[derive(Debug, Clone, Copy)]
pub struct RowAccessor<'a> {
    row: &'a Row,
}

impl<'a> RowAccessor<'a> {
    pub fn new(row: &'a Row) -> Self {
        Self { row }
    }

    /// The wrapped row.
    pub fn row(&self) -> &'a Row {
        self.row
    }

    /// Read a column as text.
    ///
    /// Integer kinds are rendered in decimal; stored text is sanitized and
    /// trimmed before it is returned.
    pub fn text(&self, column: &str) -> Result<Option<String>> {
        match self.row.value(column) {
            None => Ok(None),
            Some(RawValue::Text(value)) => Ok(Some(clean_text(value))),
            Some(RawValue::Int32(value)) => Ok(Some(value.to_string())),
            Some(RawValue::Int64(value)) => Ok(Some(value.to_string())),
            Some(other) => Err(mismatch(column, ValueKind::Text, other)),
        }
    }

    pub fn int32(&self, column: &str) -> Result<Option<i32>> {
        match self.row.value(column) {
            None => Ok(None),
            Some(RawValue::Int32(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(column, ValueKind::Int32, other)),
        }
    }

    /// Read a column as a 64-bit integer. A stored 32-bit integer widens;
    /// a stored double never narrows.
    pub fn int64(&self, column: &str) -> Result<Option<i64>> {
        match self.row.value(column) {
            None => Ok(None),
            Some(RawValue::Int32(value)) => Ok(Some(i64::from(*value))),
            Some(RawValue::Int64(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(column, ValueKind::Int64, other)),
        }
    }

    pub fn double(&self, column: &str) -> Result<Option<f64>> {
        match self.row.value(column) {
            None => Ok(None),
            Some(RawValue::Int32(value)) => Ok(Some(f64::from(*value))),
            Some(RawValue::Int64(value)) => Ok(Some(*value as f64)),
            Some(RawValue::Double(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(column, ValueKind::Double, other)),
        }
    }

    /// Read a calendar-day column as UTC midnight.
    ///
    /// Storage and output both assume day granularity zoned at UTC, so the
    /// value cannot drift between the row source and a serialization layer.
    pub fn date(&self, column: &str) -> Result<Option<DateTime<Utc>>> {
        match self.row.value(column) {
            None => Ok(None),
            Some(RawValue::Date(value)) => Ok(Some(value.and_time(NaiveTime::MIN).and_utc())),
            Some(other) => Err(mismatch(column, ValueKind::Date, other)),
        }
    }

    /// Whether a flag column is set.
    ///
    /// Absence means "not set", not an error. Numeric kinds compare against
    /// one, text against the exact literal `"1"`.
    pub fn is_true(&self, column: &str) -> Result<bool> {
        match self.row.value(column) {
            None => Ok(false),
            Some(RawValue::Bool(value)) => Ok(*value),
            Some(RawValue::Int32(value)) => Ok(*value == 1),
            Some(RawValue::Int64(value)) => Ok(*value == 1),
            Some(RawValue::Double(value)) => Ok(*value == 1.0),
            Some(RawValue::Text(value)) => Ok(value == "1"),
            Some(other) => Err(mismatch(column, ValueKind::Bool, other)),
        }
    }

    pub fn is_absent(&self, column: &str) -> bool {
        !self.row.contains(column)
    }

    /// Fail fast on the first listed column with no entry.
    ///
    /// Used as a precondition guard before a mapping step that cannot
    /// proceed with partial data.
    pub fn require_all_present(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            if self.is_absent(column) {
                return Err(DataAccessError::MissingColumn {
                    column: (*column).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Read a one-to-many attribute. Absent columns yield an empty list.
    pub fn multi(&self, column: &str) -> Result<Vec<String>> {
        match self.row.value(column) {
            None => Ok(Vec::new()),
            Some(RawValue::MultiText(values)) => Ok(values.clone()),
            Some(other) => Err(mismatch(column, ValueKind::MultiText, other)),
        }
    }

    /// Invoke `action` with the typed value when the column is present.
    ///
    /// Absent columns are a no-op; a wrong kind still fails.
    pub fn with_value<T, F>(&self, column: &str, action: F) -> Result<()>
    where
        T: ColumnValue,
        F: FnOnce(T),
    {
        if let Some(value) = T::read(self, column)? {
            action(value);
        }
        Ok(())
    }

    /// Like [`Self::with_value`], but absence fails with the supplied error.
    pub fn with_required_value<T, F>(
        &self,
        column: &str,
        action: F,
        missing: DataAccessError,
    ) -> Result<()>
    where
        T: ColumnValue,
        F: FnOnce(T),
    {
        match T::read(self, column)? {
            Some(value) => {
                action(value);
                Ok(())
            }
            None => Err(missing),
        }
    }

    /// Invoke `action` with a versioned attribute.
    ///
    /// A versioned attribute is present only when both the value column and
    /// its paired `<column>_propcat_version` column are present; if either
    /// is absent the attribute as a whole counts as absent and nothing runs.
    pub fn with_property<T, F>(&self, column: &str, action: F) -> Result<()>
    where
        T: ColumnValue,
        F: FnOnce(T, i32),
    {
        let version_column = format!("{column}{PROPCAT_VERSION_SUFFIX}");
        let Some(version) = self.int32(&version_column)? else {
            return Ok(());
        };
        if let Some(value) = T::read(self, column)? {
            action(value, version);
        }
        Ok(())
    }

    /// Like [`Self::with_property`], but a missing value column fails with
    /// the supplied error. A missing version column still counts as an
    /// absent attribute and is a no-op.
    pub fn with_required_property<T, F>(
        &self,
        column: &str,
        action: F,
        missing: DataAccessError,
    ) -> Result<()>
    where
        T: ColumnValue,
        F: FnOnce(T, i32),
    {
        if self.is_absent(column) {
            return Err(missing);
        }
        self.with_property(column, action)
    }

    /// The row's primary identifier. Every persisted record carries one.
    pub fn id(&self) -> Result<i32> {
        self.int32(IDENTITY_COLUMN)?
            .ok_or(DataAccessError::MissingIdentity)
    }

    /// The parent record identifier of hierarchical forms, when present.
    pub fn parent_id(&self) -> Result<Option<i32>> {
        self.int32(PARENT_COLUMN)
    }
}

impl<'a> From<&'a Row> for RowAccessor<'a> {
    fn from(row: &'a Row) -> Self {
        Self::new(row)
    }
}

/// Types a present column can be read as through [`RowAccessor::with_value`]
/// and the versioned-attribute helpers.
///
/// Implementations delegate to the matching typed getter, so coercion and
/// mismatch behavior stay identical whichever access path is used.
pub trait ColumnValue: Sized {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>>;
}

impl ColumnValue for String {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        accessor.text(column)
    }
}

impl ColumnValue for i32 {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        accessor.int32(column)
    }
}

impl ColumnValue for i64 {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        accessor.int64(column)
    }
}

impl ColumnValue for f64 {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        accessor.double(column)
    }
}

impl ColumnValue for DateTime<Utc> {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        accessor.date(column)
    }
}

impl ColumnValue for bool {
    fn read(accessor: &RowAccessor<'_>, column: &str) -> Result<Option<Self>> {
        if accessor.is_absent(column) {
            Ok(None)
        } else {
            accessor.is_true(column).map(Some)
        }
    }
}

fn mismatch(column: &str, expected: ValueKind, actual: &RawValue) -> DataAccessError {
    DataAccessError::TypeMismatch {
        column: column.to_string(),
        expected,
        actual: actual.kind(),
    }
}

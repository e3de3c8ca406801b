//! Row source collaborator boundary.
//!
//! Query text and storage layout belong entirely to implementations; this
//! module only fixes the shape of what they return.

use std::collections::BTreeMap;

use onko_model::{
    DataAccessError, IDENTITY_COLUMN, PARENT_COLUMN, RawValue, Result, Row, ValueKind,
};

/// Supplies raw rows backing the typed access layer.
pub trait RowSource: Send + Sync {
    /// The unique row for a record id. Zero matches is an access error, not
    /// an empty result.
    fn row_by_id(&self, id: i32) -> Result<Row>;

    /// All rows whose parent column references the given record.
    fn rows_by_parent_id(&self, parent_id: i32) -> Result<Vec<Row>>;
}

/// Deterministic in-memory row source for fixtures and tests.
#[derive(Debug, Default)]
pub struct InMemoryRowSource {
    rows: BTreeMap<i32, Row>,
}

impl InMemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a row under its identity column.
    pub fn insert(&mut self, row: Row) -> Result<()> {
        let id = match row.value(IDENTITY_COLUMN) {
            Some(RawValue::Int32(id)) => *id,
            Some(other) => {
                return Err(DataAccessError::TypeMismatch {
                    column: IDENTITY_COLUMN.to_string(),
                    expected: ValueKind::Int32,
                    actual: other.kind(),
                });
            }
            None => return Err(DataAccessError::MissingIdentity),
        };
        self.rows.insert(id, row);
        Ok(())
    }

    /// Merge a side-table multi-value attribute into a stored row, the way
    /// a loader joins one-to-many attributes after the main select.
    pub fn attach_multi<I, S>(&mut self, id: i32, column: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = self
            .rows
            .get(&id)
            .ok_or(DataAccessError::NoUniqueRow { id, count: 0 })?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let merged = row.with_column(column, RawValue::MultiText(values));
        self.rows.insert(id, merged);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for InMemoryRowSource {
    fn row_by_id(&self, id: i32) -> Result<Row> {
        self.rows
            .get(&id)
            .cloned()
            .ok_or(DataAccessError::NoUniqueRow { id, count: 0 })
    }

    fn rows_by_parent_id(&self, parent_id: i32) -> Result<Vec<Row>> {
        Ok(self
            .rows
            .values()
            .filter(|row| row.value(PARENT_COLUMN) == Some(&RawValue::Int32(parent_id)))
            .cloned()
            .collect())
    }
}

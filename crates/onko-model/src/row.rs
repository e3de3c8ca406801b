use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value::RawValue;

/// Column holding a row's persistent primary identifier.
pub const IDENTITY_COLUMN: &str = "id";

/// Column referencing the parent record of hierarchical forms.
pub const PARENT_COLUMN: &str = "parent_id";

/// Column referencing the patient a record belongs to.
pub const PATIENT_COLUMN: &str = "patient_id";

/// Suffix of the paired catalogue-version column of a versioned attribute.
pub const PROPCAT_VERSION_SUFFIX: &str = "_propcat_version";

/// One record's column-name-to-value mapping as loaded from the data source.
///
/// Rows are read-only after construction. Deriving a modified row goes
/// through [`Row::without_columns`], which leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    columns: BTreeMap<String, RawValue>,
}

impl Row {
    pub fn builder() -> RowBuilder {
        RowBuilder::default()
    }

    pub fn value(&self, column: &str) -> Option<&RawValue> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Column names in stable lexicographic order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Derive a row with one additional or replaced column.
    ///
    /// The receiver is not modified. Row loaders use this to merge
    /// side-table attributes after the main select.
    pub fn with_column(&self, name: impl Into<String>, value: impl Into<RawValue>) -> Row {
        let mut columns = self.columns.clone();
        columns.insert(name.into(), value.into());
        Row { columns }
    }

    /// Derive a row with the given columns absent.
    ///
    /// All other columns keep their values; the receiver is not modified.
    pub fn without_columns<I, S>(&self, columns: I) -> Row
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut derived = self.columns.clone();
        for column in columns {
            derived.remove(column.as_ref());
        }
        Row { columns: derived }
    }
}

impl FromIterator<(String, RawValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Builder for [`Row`] values, used by row loaders and test fixtures.
#[derive(Debug, Default)]
pub struct RowBuilder {
    columns: BTreeMap<String, RawValue>,
}

impl RowBuilder {
    pub fn column(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    /// Insert a calendar-day column.
    pub fn date(mut self, name: impl Into<String>, value: NaiveDate) -> Self {
        self.columns.insert(name.into(), RawValue::Date(value));
        self
    }

    /// Insert a multi-value text column.
    pub fn multi<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.columns.insert(name.into(), RawValue::MultiText(values));
        self
    }

    /// Insert a versioned attribute: the value column plus its paired
    /// catalogue-version column.
    pub fn property(
        mut self,
        name: impl Into<String>,
        value: impl Into<RawValue>,
        version: i32,
    ) -> Self {
        let name = name.into();
        self.columns.insert(
            format!("{name}{PROPCAT_VERSION_SUFFIX}"),
            RawValue::Int32(version),
        );
        self.columns.insert(name, value.into());
        self
    }

    pub fn build(self) -> Row {
        Row {
            columns: self.columns,
        }
    }
}

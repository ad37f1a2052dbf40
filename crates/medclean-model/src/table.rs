use std::fmt;

use crate::error::{ModelError, Result};

/// A single cell in a [`Table`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    /// Whole number read from an integer source column, kept exact.
    Integer(i64),
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric value of the cell; integers are widened to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Number(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Missing => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new<V: Into<CellValue>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy of this column under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: self.values.clone(),
        }
    }
}

/// An ordered collection of equal-length columns.
///
/// Every transform returns a new table; a `Table` handed to a transform is
/// never modified.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table, checking that all columns share the same length and
    /// that no name is repeated.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(ModelError::ColumnLengthMismatch {
                        column: column.name.clone(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.name == column.name) {
                return Err(ModelError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the first column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns a new table with columns relabelled by `lookup`.
    ///
    /// Columns for which `lookup` returns `None` keep their name. Positions
    /// and values are unchanged. Two columns may end up sharing a name; use
    /// [`Table::column`] to reach the first of them.
    #[must_use]
    pub fn rename<'a, F>(&self, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        let columns = self
            .columns
            .iter()
            .map(|column| match lookup(&column.name) {
                Some(new_name) => column.renamed(new_name),
                None => column.clone(),
            })
            .collect();
        Self { columns }
    }

    /// Returns a new table with `column` replacing the column of the same
    /// name, or appended when no such column exists.
    pub fn with_column(&self, column: Column) -> Result<Self> {
        let actual = column.len();
        if !self.columns.is_empty() && actual != self.height() {
            return Err(ModelError::ColumnLengthMismatch {
                column: column.name,
                expected: self.height(),
                actual,
            });
        }
        let mut columns = self.columns.clone();
        match columns.iter_mut().find(|c| c.name == column.name) {
            Some(slot) => *slot = column,
            None => columns.push(column),
        }
        Ok(Self { columns })
    }

    /// Applies `f` to the named column and returns the resulting column.
    ///
    /// Returns `None` when the column does not exist.
    pub fn map_column<F>(&self, name: &str, f: F) -> Option<Column>
    where
        F: FnOnce(&[CellValue]) -> Vec<CellValue>,
    {
        self.column(name).map(|column| Column {
            name: column.name.clone(),
            values: f(&column.values),
        })
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

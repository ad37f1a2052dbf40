use thiserror::Error;

/// Errors raised when building a [`Table`](crate::Table) from columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

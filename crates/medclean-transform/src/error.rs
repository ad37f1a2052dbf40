//! Error types for table transformations.

use medclean_model::ModelError;
use thiserror::Error;

/// Errors raised while assembling a transformed table.
///
/// Missing columns and missing mappings are not errors; they are logged and
/// the transform falls back to the unchanged data.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to rebuild table: {0}")]
    Table(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;

//! Metadata-driven column transforms.
//!
//! Two independent operations over a [`Table`](medclean_model::Table):
//!
//! - [`rename_columns`]: rename columns listed in `column_mappings`
//! - [`apply_categorical_mapping`]: rewrite categorical codes as
//!   `"code: description"` labels
//!
//! [`ColumnProcessor`] bundles both with the loaded metadata.

pub mod categorical;
pub mod error;
pub mod processor;
pub mod rename;

pub use categorical::{apply_categorical_mapping, categorical_columns, substitute_codes};
pub use error::{Result, TransformError};
pub use processor::{CleanOutcome, ColumnProcessor};
pub use rename::{renamable_columns, rename_columns, rename_map};

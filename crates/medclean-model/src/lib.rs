//! Data model for metadata-driven column cleaning.
//!
//! - [`Table`], [`Column`], [`CellValue`]: the in-memory data being cleaned
//! - [`MetadataConfig`], [`ColumnMapping`]: the mapping file contents
//! - [`CategoryCode`]: per-code numeric/text matching

pub mod code;
pub mod error;
pub mod mapping;
pub mod ordered;
pub mod table;

pub use code::{CategoryCode, CodeMatch, is_strict_numeric};
pub use error::{ModelError, Result};
pub use mapping::{ColumnKind, ColumnMapping, ConfigIssue, MetadataConfig};
pub use ordered::OrderedMap;
pub use table::{CellValue, Column, Table};

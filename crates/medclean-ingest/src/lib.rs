//! Metadata and table ingestion.
//!
//! - **Metadata**: load and save the `column_mappings` JSON file
//! - **CSV**: read and write [`Table`](medclean_model::Table)s through Polars
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use medclean_ingest::{load_metadata, read_csv_table};
//!
//! let config = load_metadata(Path::new("db_metadata.json"))?;
//! let table = read_csv_table(Path::new("patients.csv"))?;
//! ```

mod csv;
mod error;
mod metadata;

// === Error Types ===
pub use error::{IngestError, Result};

// === Metadata ===
pub use metadata::{DEFAULT_METADATA_FILE, load_metadata, save_metadata};

// === CSV / DataFrame ===
pub use csv::{cell_from_any, dataframe_to_table, read_csv_table, table_to_dataframe, write_csv_table};

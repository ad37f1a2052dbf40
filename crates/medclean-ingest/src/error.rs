//! Error types for metadata and table ingestion.

use std::path::PathBuf;

use medclean_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading or saving metadata and tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Metadata Errors ===
    /// Metadata file does not exist.
    #[error("metadata file {path} not found. Please ensure the JSON file exists.")]
    ConfigNotFound { path: PathBuf },

    /// Metadata file is not valid JSON or does not match the mapping schema.
    #[error("invalid JSON format in {path}: {message}")]
    ConfigMalformed { path: PathBuf, message: String },

    /// Metadata could not be serialized.
    #[error("failed to serialize metadata for {path}: {message}")]
    ConfigSerialize { path: PathBuf, message: String },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV / DataFrame Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// DataFrame could not be turned into a table.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

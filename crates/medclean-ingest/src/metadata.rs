//! Metadata file loading and saving.

use std::path::Path;

use medclean_model::MetadataConfig;

use crate::error::{IngestError, Result};

/// Metadata file used when no path is given.
pub const DEFAULT_METADATA_FILE: &str = "db_metadata.json";

/// Loads column mappings from a JSON metadata file.
///
/// Configuration issues reported by [`MetadataConfig::validate`] are logged
/// as warnings; they do not fail the load.
///
/// # Errors
///
/// - [`IngestError::ConfigNotFound`] when the file does not exist
/// - [`IngestError::ConfigMalformed`] when the content is not valid JSON or
///   lacks the `column_mappings` schema
/// - [`IngestError::FileRead`] for any other read failure
pub fn load_metadata(path: &Path) -> Result<MetadataConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let config: MetadataConfig =
        serde_json::from_str(&content).map_err(|e| IngestError::ConfigMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for issue in config.validate() {
        tracing::warn!(path = %path.display(), "{issue}");
    }

    tracing::info!(
        path = %path.display(),
        count = config.column_mappings.len(),
        "Loaded column mappings"
    );
    Ok(config)
}

/// Writes metadata back to disk as indented JSON, keeping key order.
pub fn save_metadata(config: &MetadataConfig, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(config).map_err(|e| IngestError::ConfigSerialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    std::fs::write(path, json).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "Metadata saved");
    Ok(())
}

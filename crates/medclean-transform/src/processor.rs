//! High-level entry point tying renaming and substitution together.

use medclean_model::{Column, MetadataConfig, OrderedMap, Table};
use serde::Serialize;

use crate::categorical::{apply_categorical_mapping, categorical_columns};
use crate::error::Result;
use crate::rename::{rename_columns, rename_map, renamable_columns};

/// Cleans tables according to a loaded metadata file.
#[derive(Debug, Clone)]
pub struct ColumnProcessor {
    config: MetadataConfig,
}

/// Result of [`ColumnProcessor::clean`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanOutcome {
    pub table: Table,
    /// `(old, new)` pairs that were renamed.
    pub renamed: Vec<(String, String)>,
    /// Columns whose codes were substituted, by their new name.
    pub substituted: Vec<String>,
}

impl ColumnProcessor {
    pub fn new(config: MetadataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// All `old -> new` column name pairs.
    pub fn column_mapping(&self) -> OrderedMap<String> {
        rename_map(&self.config)
    }

    /// Category tables keyed by renamed column name.
    pub fn categorical_columns(&self) -> OrderedMap<&OrderedMap<String>> {
        categorical_columns(&self.config)
    }

    pub fn rename_columns(&self, table: &Table) -> Table {
        rename_columns(table, &self.config)
    }

    pub fn apply_categorical_mapping(
        &self,
        table: &Table,
        column_name: &str,
    ) -> Option<Column> {
        apply_categorical_mapping(table, &self.config, column_name)
    }

    /// Renames columns, then substitutes codes in every categorical column
    /// the renamed table contains.
    ///
    /// # Errors
    ///
    /// [`TransformError::Table`](crate::TransformError::Table) if a
    /// substituted column cannot be put back into the table.
    pub fn clean(&self, table: &Table) -> Result<CleanOutcome> {
        let span = tracing::info_span!("clean", columns = table.width(), rows = table.height());
        let _guard = span.enter();

        let renamed = renamable_columns(table, &self.config);
        let mut cleaned = self.rename_columns(table);
        let mut substituted = Vec::new();

        for (name, _) in self.categorical_columns().iter() {
            if !cleaned.has_column(name) {
                continue;
            }
            if let Some(column) = self.apply_categorical_mapping(&cleaned, name) {
                cleaned = cleaned.with_column(column)?;
                substituted.push(name.to_string());
            }
        }

        tracing::info!(
            renamed = renamed.len(),
            substituted = substituted.len(),
            "Cleaned table"
        );
        Ok(CleanOutcome {
            table: cleaned,
            renamed,
            substituted,
        })
    }
}

impl From<MetadataConfig> for ColumnProcessor {
    fn from(config: MetadataConfig) -> Self {
        Self::new(config)
    }
}

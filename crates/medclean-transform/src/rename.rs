//! Column renaming driven by `column_mappings`.

use medclean_model::{MetadataConfig, OrderedMap, Table};

/// Returns every `old -> new` name pair from the metadata.
pub fn rename_map(config: &MetadataConfig) -> OrderedMap<String> {
    config
        .column_mappings
        .iter()
        .map(|(old, mapping)| (old, mapping.new_name.clone()))
        .collect()
}

/// Returns the `(old, new)` pairs whose old name is a column of `table`,
/// in metadata order.
pub fn renamable_columns(table: &Table, config: &MetadataConfig) -> Vec<(String, String)> {
    config
        .column_mappings
        .iter()
        .filter(|(old, _)| table.has_column(old))
        .map(|(old, mapping)| (old.to_string(), mapping.new_name.clone()))
        .collect()
}

/// Renames the columns of `table` that appear in the metadata.
///
/// Columns without a mapping keep their name, and mapping entries for
/// columns the table does not have are skipped. Values are never touched.
/// When nothing matches, a warning is logged and an unchanged copy is
/// returned.
pub fn rename_columns(table: &Table, config: &MetadataConfig) -> Table {
    let pairs = renamable_columns(table, config);
    if pairs.is_empty() {
        tracing::warn!("No matching columns found to rename");
        return table.clone();
    }

    for (old, new) in &pairs {
        let collides = table.has_column(new) && !pairs.iter().any(|(o, _)| o == new);
        if collides {
            tracing::warn!(
                column = %old,
                new_name = %new,
                "Renamed column collides with an existing column"
            );
        }
    }

    let renamed = table.rename(|name| {
        pairs
            .iter()
            .find(|(old, _)| old == name)
            .map(|(_, new)| new.as_str())
    });

    tracing::info!(count = pairs.len(), "Renamed {} columns", pairs.len());
    for (old, new) in &pairs {
        tracing::info!("  '{old}' -> '{new}'");
    }
    renamed
}

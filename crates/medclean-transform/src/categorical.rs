//! Categorical code substitution.
//!
//! Cells holding a registered code are rewritten to `"{code}: {description}"`.
//! Each code is matched numerically or textually on its own (see
//! [`CategoryCode`]), so one column can mix both kinds of code.

use medclean_model::{CategoryCode, CellValue, Column, MetadataConfig, OrderedMap, Table};

/// Returns the category tables of every categorical mapping, keyed by the
/// renamed column name.
///
/// Entries whose category table is null or empty are left out.
pub fn categorical_columns(config: &MetadataConfig) -> OrderedMap<&OrderedMap<String>> {
    config
        .column_mappings
        .values()
        .filter_map(|mapping| {
            mapping
                .active_categories()
                .map(|categories| (mapping.new_name.as_str(), categories))
        })
        .collect()
}

/// Rewrites coded cells, leaving every other cell as it was.
///
/// Codes are applied in table order and always compared against the
/// original cell, so when two codes match the same value the later one wins.
pub fn substitute_codes(values: &[CellValue], categories: &OrderedMap<String>) -> Vec<CellValue> {
    let codes: Vec<(CategoryCode<'_>, &str)> = categories
        .iter()
        .map(|(code, description)| (CategoryCode::classify(code), description.as_str()))
        .collect();

    values
        .iter()
        .map(|value| {
            codes
                .iter()
                .rev()
                .find(|(code, _)| code.matches(value))
                .map_or_else(
                    || value.clone(),
                    |(code, description)| CellValue::Text(code.label(description)),
                )
        })
        .collect()
}

/// Applies the categorical mapping of `column_name` to that column.
///
/// `column_name` is the name after renaming. Returns:
///
/// - `None` when the table has no such column (logged as a warning);
/// - the column unchanged when it has no categorical mapping (logged as a
///   warning);
/// - otherwise a new column with codes replaced by labels.
///
/// The table itself is never modified.
pub fn apply_categorical_mapping(
    table: &Table,
    config: &MetadataConfig,
    column_name: &str,
) -> Option<Column> {
    let Some(column) = table.column(column_name) else {
        tracing::warn!(column = %column_name, "Column '{column_name}' not found in table");
        return None;
    };

    let categorical = categorical_columns(config);
    let Some(categories) = categorical.get(column_name) else {
        tracing::warn!(
            column = %column_name,
            "No categorical mapping found for '{column_name}'"
        );
        return Some(column.clone());
    };

    for (code, _) in categories.iter() {
        if CategoryCode::classify(code).ambiguous {
            tracing::warn!(
                column = %column_name,
                code = %code,
                "Code is not a valid number; matching it as text"
            );
        }
    }

    let values = substitute_codes(&column.values, categories);
    let replaced = values
        .iter()
        .zip(&column.values)
        .filter(|(new, old)| new != old)
        .count();
    tracing::debug!(
        column = %column_name,
        codes = categories.len(),
        replaced,
        "Applied categorical mapping"
    );

    Some(Column {
        name: column.name.clone(),
        values,
    })
}

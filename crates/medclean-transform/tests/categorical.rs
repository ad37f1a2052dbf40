//! Tests for categorical code substitution.

mod common;

use common::{capture_logs, patient_metadata, patient_table};
use medclean_model::{CellValue, Column, ColumnMapping, MetadataConfig, Table};
use medclean_transform::{apply_categorical_mapping, rename_columns};

fn texts(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::text(*v)).collect()
}

#[test]
fn numeric_codes_are_labelled() {
    let config = patient_metadata();
    let table = rename_columns(&patient_table(), &config);

    let column = apply_categorical_mapping(&table, &config, "sex").expect("sex column");
    assert_eq!(column.name, "sex");
    assert_eq!(column.values, texts(&["1: Male", "2: Female", "1: Male"]));
}

#[test]
fn numeric_codes_label_integer_cells() {
    let config = patient_metadata();
    let table = Table::from_columns(vec![Column::new(
        "sex",
        [CellValue::Integer(2), CellValue::Missing, CellValue::Integer(7)],
    )])
    .unwrap();

    let column = apply_categorical_mapping(&table, &config, "sex").expect("sex column");
    assert_eq!(
        column.values,
        vec![CellValue::text("2: Female"), CellValue::Missing, CellValue::Integer(7)]
    );
}

#[test]
fn string_codes_are_labelled() {
    let config = patient_metadata();
    let table = rename_columns(&patient_table(), &config);

    let column = apply_categorical_mapping(&table, &config, "smoker").expect("smoker column");
    assert_eq!(column.values, texts(&["Y: Yes", "N: No", "Y: Yes"]));
}

#[test]
fn source_table_is_not_modified() {
    let config = patient_metadata();
    let table = rename_columns(&patient_table(), &config);
    let before = table.clone();

    let _ = apply_categorical_mapping(&table, &config, "sex");
    assert_eq!(table, before);
}

#[test]
fn absent_column_returns_none_and_warns() {
    let config = patient_metadata();
    let table = patient_table();

    let (result, logs) = capture_logs(|| apply_categorical_mapping(&table, &config, "sex"));
    assert!(result.is_none());
    assert!(logs.contains("Column 'sex' not found in table"), "{logs}");
}

#[test]
fn column_without_categories_is_returned_unchanged() {
    let config = patient_metadata();
    let table = rename_columns(&patient_table(), &config);

    let (result, logs) = capture_logs(|| apply_categorical_mapping(&table, &config, "age"));
    assert_eq!(result.as_ref(), table.column("age"));
    assert!(logs.contains("No categorical mapping found for 'age'"), "{logs}");
}

#[test]
fn lookup_uses_renamed_name_not_original() {
    let config = patient_metadata();
    let table = patient_table();

    let (result, logs) = capture_logs(|| apply_categorical_mapping(&table, &config, "P_SEX"));
    assert_eq!(result.as_ref(), table.column("P_SEX"));
    assert!(logs.contains("No categorical mapping found"), "{logs}");
}

#[test]
fn ambiguous_code_is_matched_as_text_and_warned() {
    let mut config = MetadataConfig::default();
    config.column_mappings.insert(
        "VERSION",
        ColumnMapping::categorical("version", [("1.2.3", "Legacy"), ("2", "Current")]),
    );
    let table = Table::from_columns(vec![Column::new(
        "version",
        [CellValue::text("1.2.3"), CellValue::Number(2.0), CellValue::Number(123.0)],
    )])
    .unwrap();

    let (result, logs) = capture_logs(|| apply_categorical_mapping(&table, &config, "version"));
    assert_eq!(
        result.unwrap().values,
        vec![
            CellValue::text("1.2.3: Legacy"),
            CellValue::text("2: Current"),
            CellValue::Number(123.0),
        ]
    );
    assert!(logs.contains("matching it as text"), "{logs}");
}

#[test]
fn missing_cells_survive_substitution() {
    let mut config = MetadataConfig::default();
    config.column_mappings.insert(
        "RESP",
        ColumnMapping::categorical("response", [("0", "No"), ("1", "Yes")]),
    );
    let table = Table::from_columns(vec![Column::new(
        "response",
        [Some(1.0), None, Some(0.0)],
    )])
    .unwrap();

    let column = apply_categorical_mapping(&table, &config, "response").unwrap();
    assert_eq!(
        column.values,
        vec![
            CellValue::text("1: Yes"),
            CellValue::Missing,
            CellValue::text("0: No"),
        ]
    );
}

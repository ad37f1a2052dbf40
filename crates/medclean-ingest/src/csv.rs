//! CSV files and Polars DataFrames to and from [`Table`].

use std::fs::File;
use std::path::Path;

use medclean_model::{CellValue, Column, Table};
use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Converts a single Polars value into a cell.
///
/// Nulls become [`CellValue::Missing`], integers become
/// [`CellValue::Integer`], other numbers become [`CellValue::Number`], and
/// everything else is kept as text.
pub fn cell_from_any(value: AnyValue) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        other if other.dtype().is_integer() => match other.extract::<i64>() {
            Some(integer) => CellValue::Integer(integer),
            // u64 beyond i64::MAX
            None => CellValue::Text(other.to_string()),
        },
        other => match other.extract::<f64>() {
            Some(number) => CellValue::Number(number),
            None => CellValue::Text(other.to_string()),
        },
    }
}

/// Converts a DataFrame into a [`Table`], preserving column order.
pub fn dataframe_to_table(df: &DataFrame) -> Result<Table> {
    let mut columns = Vec::with_capacity(df.width());
    for series in df.get_columns() {
        let mut values = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            values.push(cell_from_any(series.get(idx)?));
        }
        columns.push(Column {
            name: series.name().to_string(),
            values,
        });
    }
    Ok(Table::from_columns(columns)?)
}

/// Converts a [`Table`] into a DataFrame.
///
/// Columns holding only integers (and missing cells) become `Int64`, columns
/// holding any other mix of numbers become `Float64`, and any other column
/// becomes `String`, with numbers rendered in their display form.
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let present = || column.values.iter().filter(|v| !v.is_missing());
            if present().all(|v| matches!(v, CellValue::Integer(_))) {
                let values: Vec<Option<i64>> =
                    column.values.iter().map(CellValue::as_integer).collect();
                polars::prelude::Column::new(column.name.as_str().into(), values)
            } else if present().all(CellValue::is_numeric) {
                let values: Vec<Option<f64>> =
                    column.values.iter().map(CellValue::as_number).collect();
                polars::prelude::Column::new(column.name.as_str().into(), values)
            } else {
                let values: Vec<Option<String>> = column
                    .values
                    .iter()
                    .map(|v| (!v.is_missing()).then(|| v.to_string()))
                    .collect();
                polars::prelude::Column::new(column.name.as_str().into(), values)
            }
        })
        .collect::<Vec<_>>();
    Ok(DataFrame::new(columns)?)
}

/// Reads a CSV file with a single header row into a [`Table`].
pub fn read_csv_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Read CSV table"
    );
    dataframe_to_table(&df)
}

/// Writes a [`Table`] to a CSV file with a header row.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    let mut df = table_to_dataframe(table)?;
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Wrote CSV table"
    );
    Ok(())
}

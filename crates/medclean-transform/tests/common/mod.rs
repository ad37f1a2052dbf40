//! Shared fixtures for transform tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use medclean_model::{CellValue, Column, ColumnKind, ColumnMapping, MetadataConfig, Table};
use tracing_subscriber::fmt::MakeWriter;

/// Metadata with two categorical columns and one numeric column.
pub fn patient_metadata() -> MetadataConfig {
    let mut config = MetadataConfig::default();
    config.column_mappings.insert(
        "P_SEX",
        ColumnMapping::categorical("sex", [("1", "Male"), ("2", "Female")]),
    );
    config.column_mappings.insert(
        "P_SMOKER",
        ColumnMapping::categorical("smoker", [("Y", "Yes"), ("N", "No")]),
    );
    config.column_mappings.insert(
        "P_AGE",
        ColumnMapping::new("age", ColumnKind::Other("numeric".to_string())),
    );
    config
}

/// Raw table using the original column names.
pub fn patient_table() -> Table {
    Table::from_columns(vec![
        Column::new("P_SEX", [1.0, 2.0, 1.0]),
        Column::new("P_SMOKER", ["Y", "N", "Y"]),
        Column::new(
            "P_AGE",
            [CellValue::Number(40.0), CellValue::Missing, CellValue::Number(71.0)],
        ),
    ])
    .expect("build patient table")
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber that records every event at debug level or
/// above, returning its result and the captured log text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().expect("log buffer lock").clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

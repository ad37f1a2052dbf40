//! Integration tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use medclean_cli::cli::{CleanArgs, MetadataArgs};
use medclean_cli::commands::{run_check, run_clean};
use medclean_cli::summary::{clean_table, mapping_table};
use medclean_ingest::{load_metadata, read_csv_table};
use medclean_model::{CellValue, ConfigIssue};

const METADATA: &str = r#"{
  "column_mappings": {
    "P_SEXO": {"new_name": "sex", "type": "categorical", "categories": {"1": "Male", "2": "Female"}},
    "P_FUMA": {"new_name": "smoker", "type": "categorical", "categories": {"S": "Yes", "N": "No"}},
    "P_EDAD": {"new_name": "age", "type": "numeric", "categories": null}
  }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn clean_args(dir: &Path, metadata: PathBuf, rename_only: bool) -> CleanArgs {
    CleanArgs {
        input: write(dir, "patients.csv", "P_SEXO,P_FUMA,P_EDAD,SITE\n1,S,40,A\n2,N,,B\n"),
        output: dir.join("cleaned.csv"),
        metadata: MetadataArgs { metadata },
        rename_only,
    }
}

#[test]
fn clean_writes_renamed_and_labelled_csv() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "db_metadata.json", METADATA);
    let args = clean_args(dir.path(), metadata, false);

    let report = run_clean(&args).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.substituted, vec!["sex", "smoker"]);

    let cleaned = read_csv_table(&args.output).unwrap();
    assert_eq!(cleaned.column_names(), vec!["sex", "smoker", "age", "SITE"]);
    assert_eq!(
        cleaned.column("sex").unwrap().values,
        vec![CellValue::text("1: Male"), CellValue::text("2: Female")]
    );
    assert_eq!(
        cleaned.column("smoker").unwrap().values,
        vec![CellValue::text("S: Yes"), CellValue::text("N: No")]
    );
    assert_eq!(
        cleaned.column("age").unwrap().values,
        vec![CellValue::Integer(40), CellValue::Missing]
    );

    let rendered = clean_table(&report).to_string();
    assert!(rendered.contains("P_SEXO"));
    assert!(rendered.contains("smoker"));
}

#[test]
fn rename_only_keeps_codes() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "db_metadata.json", METADATA);
    let args = clean_args(dir.path(), metadata, true);

    let report = run_clean(&args).unwrap();
    assert!(report.substituted.is_empty());

    let cleaned = read_csv_table(&args.output).unwrap();
    assert_eq!(
        cleaned.column("sex").unwrap().values,
        vec![CellValue::Integer(1), CellValue::Integer(2)]
    );
}

#[test]
fn clean_leaves_unmapped_integers_as_written() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "db_metadata.json", METADATA);
    let args = CleanArgs {
        input: write(dir.path(), "ids.csv", "P_EDAD,RECORD_ID\n40,9007199254740993\n55,2\n"),
        output: dir.path().join("cleaned.csv"),
        metadata: MetadataArgs { metadata },
        rename_only: false,
    };

    run_clean(&args).unwrap();
    let written = fs::read_to_string(&args.output).unwrap();
    assert_eq!(written, "age,RECORD_ID\n40,9007199254740993\n55,2\n");
}

#[test]
fn clean_fails_on_missing_metadata() {
    let dir = TempDir::new().unwrap();
    let args = clean_args(dir.path(), dir.path().join("absent.json"), false);

    let error = run_clean(&args).unwrap_err();
    assert!(format!("{error:#}").contains("not found"));
    assert!(!args.output.exists());
}

#[test]
fn check_reports_ambiguous_codes() {
    let dir = TempDir::new().unwrap();
    let metadata = write(
        dir.path(),
        "db_metadata.json",
        r#"{"column_mappings": {"V": {"new_name": "v", "type": "categorical", "categories": {"1.2.3": "odd"}}}}"#,
    );

    let issues = run_check(&MetadataArgs { metadata }).unwrap();
    assert_eq!(
        issues,
        vec![ConfigIssue::AmbiguousCode {
            column: "V".to_string(),
            code: "1.2.3".to_string(),
        }]
    );
}

#[test]
fn check_passes_clean_metadata() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "db_metadata.json", METADATA);
    assert!(run_check(&MetadataArgs { metadata }).unwrap().is_empty());
}

#[test]
fn mapping_table_lists_each_entry() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "db_metadata.json", METADATA);
    let config = load_metadata(&metadata).unwrap();

    let rendered = mapping_table(&config).to_string();
    for name in ["P_SEXO", "P_FUMA", "P_EDAD", "categorical", "numeric"] {
        assert!(rendered.contains(name), "missing {name} in\n{rendered}");
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info_span;

use medclean_ingest::{load_metadata, read_csv_table, write_csv_table};
use medclean_model::{ConfigIssue, MetadataConfig};
use medclean_transform::ColumnProcessor;

use crate::cli::{CleanArgs, MetadataArgs};
use crate::summary::mapping_table;

/// What `clean` did, for the summary printout.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub renamed: Vec<(String, String)>,
    pub substituted: Vec<String>,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanReport> {
    let span = info_span!("clean_file", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(&args.metadata.metadata)?;
    let processor = ColumnProcessor::new(config);
    let table = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let (cleaned, renamed, substituted) = if args.rename_only {
        let renamed = medclean_transform::renamable_columns(&table, processor.config());
        (processor.rename_columns(&table), renamed, Vec::new())
    } else {
        let outcome = processor.clean(&table).context("clean table")?;
        (outcome.table, outcome.renamed, outcome.substituted)
    };

    write_csv_table(&cleaned, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;

    Ok(CleanReport {
        input: args.input.clone(),
        output: args.output.clone(),
        rows: cleaned.height(),
        renamed,
        substituted,
    })
}

pub fn run_mappings(args: &MetadataArgs) -> Result<()> {
    let config = load_config(&args.metadata)?;
    println!("{}", mapping_table(&config));
    Ok(())
}

/// Loads the metadata and returns every configuration issue found.
pub fn run_check(args: &MetadataArgs) -> Result<Vec<ConfigIssue>> {
    let config = load_config(&args.metadata)?;
    Ok(config.validate())
}

fn load_config(path: &Path) -> Result<MetadataConfig> {
    load_metadata(path).with_context(|| format!("load metadata {}", path.display()))
}

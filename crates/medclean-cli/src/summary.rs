use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use medclean_model::{ConfigIssue, MetadataConfig, OrderedMap};

use crate::commands::CleanReport;

pub fn print_clean_summary(report: &CleanReport) {
    println!("Input: {}", report.input.display());
    println!("Output: {}", report.output.display());
    println!("Rows: {}", report.rows);
    println!("{}", clean_table(report));
}

/// One row per renamed column, flagging the ones whose codes were labelled.
pub fn clean_table(report: &CleanReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Original"),
        header_cell("Renamed"),
        header_cell("Labelled"),
    ]);
    apply_table_style(&mut table);
    for (old, new) in &report.renamed {
        let labelled = report.substituted.iter().any(|name| name == new);
        table.add_row(vec![
            Cell::new(old),
            Cell::new(new).fg(Color::Blue),
            flag_cell(labelled),
        ]);
    }
    for name in &report.substituted {
        if !report.renamed.iter().any(|(_, new)| new == name) {
            table.add_row(vec![dim_cell("-"), Cell::new(name), flag_cell(true)]);
        }
    }
    table
}

/// Lists every mapping entry with its kind and number of categories.
pub fn mapping_table(config: &MetadataConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("New name"),
        header_cell("Type"),
        header_cell("Categories"),
    ]);
    apply_table_style(&mut table);
    for (old, mapping) in config.column_mappings.iter() {
        let categories = mapping.categories.as_ref().map_or(0, OrderedMap::len);
        let kind_cell = if mapping.kind.is_categorical() {
            Cell::new(mapping.kind.as_str()).fg(Color::Green)
        } else {
            Cell::new(mapping.kind.as_str())
        };
        table.add_row(vec![
            Cell::new(old),
            Cell::new(&mapping.new_name),
            kind_cell,
            if categories == 0 {
                dim_cell("-")
            } else {
                Cell::new(categories)
            },
        ]);
    }
    table
}

pub fn print_issues(issues: &[ConfigIssue]) {
    if issues.is_empty() {
        println!("No issues found.");
        return;
    }
    for issue in issues {
        println!("warning: {issue}");
    }
    println!("{} issue(s) found.", issues.len());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

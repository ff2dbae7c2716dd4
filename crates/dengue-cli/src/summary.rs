use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dengue_model::Source;

use crate::types::JobResult;

pub fn print_summary(result: &JobResult) {
    let report = &result.report;
    println!("{}", summary_table(result));
    if report.dry_run {
        println!("Dry run: no output written");
    } else {
        for path in &report.outputs {
            println!("Output: {}", path.display());
        }
    }
    if let Some(path) = &result.report_path {
        println!("Run report: {}", path.display());
    }
    println!("Finished in {} ms", report.stats.duration_ms);
}

/// One row per source, then the joined total.
pub fn summary_table(result: &JobResult) -> Table {
    let stats = &result.report.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Lines"),
        header_cell("Keys"),
        header_cell("Unmatched keys"),
        header_cell("Adjusted values"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        source_cell(Source::Chuvas),
        Cell::new(stats.rain_lines),
        Cell::new(stats.rain_keys),
        count_cell(stats.rain_only_keys, Color::Yellow),
        count_cell(stats.negative_rain_readings, Color::Yellow),
    ]);
    table.add_row(vec![
        source_cell(Source::Dengue),
        Cell::new(stats.case_lines),
        Cell::new(stats.case_keys),
        count_cell(stats.case_only_keys, Color::Yellow),
        count_cell(stats.zeroed_case_counts, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("JOINED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(stats.joined_keys).add_attribute(Attribute::Bold),
        count_cell(stats.dropped_keys(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn source_cell(source: Source) -> Cell {
    Cell::new(source.name())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shelf_cli::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Catalog: {}", summary.catalog.display());
    if summary.outputs.is_some() {
        println!("Output: {}", summary.output_dir.display());
    } else {
        println!("Output: (dry run, nothing written)");
    }

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![Cell::new("Records read"), Cell::new(summary.records_read)]);
    counts.add_row(vec![
        Cell::new("Duplicates dropped"),
        count_cell(summary.duplicates_dropped, Color::Yellow),
    ]);
    counts.add_row(vec![
        Cell::new("Records rejected"),
        count_cell(summary.rejected.len(), Color::Red),
    ]);
    counts.add_row(vec![
        Cell::new("Size rows excluded"),
        count_cell(summary.excluded_rows, Color::Yellow),
    ]);
    counts.add_row(vec![
        Cell::new("Size records retained"),
        Cell::new(summary.size_records).add_attribute(Attribute::Bold),
    ]);
    println!("{counts}");

    let mut relations = Table::new();
    relations.set_header(vec![
        header_cell("Relation"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_table_style(&mut relations);
    align_column(&mut relations, 1, CellAlignment::Right);
    let (products, retailers, sizes, facts) = summary.schema.row_counts();
    let paths = summary.outputs.as_ref();
    relations.add_row(relation_row(
        "dim_product",
        products,
        paths.map(|p| &p.dim_product),
    ));
    relations.add_row(relation_row(
        "dim_retailer",
        retailers,
        paths.map(|p| &p.dim_retailer),
    ));
    relations.add_row(relation_row("dim_size", sizes, paths.map(|p| &p.dim_size)));
    relations.add_row(relation_row(
        "fact_sales",
        facts,
        paths.map(|p| &p.fact_sales),
    ));
    println!("{relations}");

    print_null_profile(summary);

    if !summary.coverage_gaps.is_empty() {
        println!(
            "Size groups outside the allow-list: {}",
            summary.coverage_gaps.join(", ")
        );
    }
    if !summary.rejected.is_empty() {
        eprintln!("Rejected records:");
        for rejected in &summary.rejected {
            eprintln!("- record {}: {}", rejected.index, rejected.reason);
        }
    }
}

fn print_null_profile(summary: &RunSummary) {
    if summary.null_profile.iter().all(|entry| entry.nulls == 0) {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Nulls")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &summary.null_profile {
        table.add_row(vec![
            Cell::new(entry.field),
            count_cell(entry.nulls, Color::Yellow),
        ]);
    }
    println!("Null profile:");
    println!("{table}");
}

fn relation_row(name: &str, rows: usize, path: Option<&PathBuf>) -> Vec<Cell> {
    let file = match path {
        Some(path) => Cell::new(path.display().to_string()),
        None => dim_cell("-"),
    };
    vec![
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(rows),
        file,
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

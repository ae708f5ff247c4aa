use anyhow::Result;
use comfy_table::Table;

use shelf_classify::category::{category_rules, subcategory_rules};
use shelf_classify::color::color_rules;
use shelf_classify::size::{shape_rules, size_bands};
use shelf_cli::pipeline::{RunOptions, RunSummary, default_output_dir, run};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_catalog(args: &RunArgs) -> Result<RunSummary> {
    let options = RunOptions {
        catalog: args.catalog.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.catalog)),
        dry_run: args.dry_run,
    };
    run(&options)
}

/// Print the shipped rule tables in evaluation order.
pub fn run_rules() -> Result<()> {
    let mut categories = Table::new();
    categories.set_header(vec!["#", "Pattern", "Category"]);
    apply_table_style(&mut categories);
    for (index, (pattern, category)) in category_rules().into_iter().enumerate() {
        categories.add_row(vec![
            (index + 1).to_string(),
            pattern.to_string(),
            category.to_string(),
        ]);
    }
    println!("Category rules (product name, first match wins):");
    println!("{categories}");

    let mut subcategories = Table::new();
    subcategories.set_header(vec!["#", "Pattern", "Subcategory"]);
    apply_table_style(&mut subcategories);
    for (index, (pattern, subcategory)) in subcategory_rules().into_iter().enumerate() {
        subcategories.add_row(vec![
            (index + 1).to_string(),
            pattern.to_string(),
            subcategory.to_string(),
        ]);
    }
    println!("Subcategory rules (name or description, no catch-all):");
    println!("{subcategories}");

    let mut colors = Table::new();
    colors.set_header(vec!["#", "Shades", "Bucket"]);
    apply_table_style(&mut colors);
    for (index, (shades, bucket)) in color_rules().into_iter().enumerate() {
        colors.add_row(vec![
            (index + 1).to_string(),
            shades.to_string(),
            bucket.to_string(),
        ]);
    }
    println!("Color buckets (substring match on lowered text):");
    println!("{colors}");

    let mut sizes = Table::new();
    sizes.set_header(vec!["#", "Rule", "Size group"]);
    apply_table_style(&mut sizes);
    let mut index = 0usize;
    for (low, high, group) in size_bands() {
        index += 1;
        sizes.add_row(vec![
            index.to_string(),
            format!("size_number in [{low},{high}]"),
            group.to_string(),
        ]);
    }
    for (pattern, group) in shape_rules() {
        index += 1;
        sizes.add_row(vec![
            index.to_string(),
            format!("token matches {pattern}"),
            group.to_string(),
        ]);
    }
    println!("Size group rules (numeric bands before token shapes):");
    println!("{sizes}");
    Ok(())
}

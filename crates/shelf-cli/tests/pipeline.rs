//! End-to-end pipeline tests: catalog file in, relation CSVs out.

use std::fs;
use std::path::Path;

use shelf_cli::pipeline::{RunOptions, default_output_dir, run};

const CATALOG: &str = concat!(
    r#"{"product_name":"Lace Plunge Bra","brand_name":"B.TEMPT'D","color":"Midnight Navy","retailer":"Amazon","rating":4.4,"review_count":120,"mrp":58.0,"total_sizes":["32B","34C","s"],"available_size":["32B"]}"#,
    "\n",
    r#"{"product_name":"Lace Plunge Bra","brand_name":"B.TEMPT'D","color":"Midnight Navy","retailer":"Amazon","rating":4.4,"review_count":120,"mrp":58.0,"total_sizes":["32B","34C","s"],"available_size":["32B"]}"#,
    "\n",
    r#"{"product_name":"Cheeky Panty","brand_name":"Aerie","color":"Ruby","retailer":"Nordstrom","total_sizes":"S, M, L","available_size":"M"}"#,
    "\n",
    r#"{"description":"catalog row without a name"}"#,
    "\n",
);

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.ndjson");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn full_run_writes_all_relations() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let options = RunOptions {
        catalog: catalog.clone(),
        output_dir: dir.path().join("out"),
        dry_run: false,
    };
    let summary = run(&options).unwrap();

    assert_eq!(summary.records_read, 4);
    assert_eq!(summary.duplicates_dropped, 1);
    assert_eq!(summary.rejected.len(), 1);
    assert_eq!(summary.rejected[0].index, 2);
    // The bra's "s" row is excluded; the panty keeps all three letter sizes.
    assert_eq!(summary.excluded_rows, 1);
    assert_eq!(summary.size_records, 5);
    assert_eq!(summary.coverage_gaps, ["Not Bras"]);
    assert_eq!(summary.schema.row_counts(), (5, 5, 5, 5));

    let paths = summary.outputs.expect("relations written");
    for path in [
        &paths.dim_product,
        &paths.dim_retailer,
        &paths.dim_size,
        &paths.fact_sales,
    ] {
        assert!(path.exists(), "missing {}", path.display());
    }

    let fact_sales = fs::read_to_string(&paths.fact_sales).unwrap();
    let lines: Vec<&str> = fact_sales.trim_end().lines().collect();
    assert_eq!(lines.len(), 6);
    // sales_id is the first column and runs dense from 1.
    for (row, line) in lines[1..].iter().enumerate() {
        let id: usize = line.split(',').next().unwrap().parse().unwrap();
        assert_eq!(id, row + 1);
    }
}

#[test]
fn dry_run_assembles_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let output_dir = dir.path().join("out");
    let options = RunOptions {
        catalog,
        output_dir: output_dir.clone(),
        dry_run: true,
    };
    let summary = run(&options).unwrap();
    assert!(summary.outputs.is_none());
    assert_eq!(summary.size_records, 5);
    assert!(!output_dir.exists());
}

#[test]
fn missing_catalog_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        catalog: dir.path().join("absent.json"),
        output_dir: dir.path().join("out"),
        dry_run: true,
    };
    let error = run(&options).unwrap_err();
    assert!(error.to_string().contains("read catalog"));
}

#[test]
fn output_defaults_beside_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    assert_eq!(default_output_dir(&catalog), dir.path().join("output"));
}

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use shelf_model::StarSchema;

use crate::frames::{dim_product_frame, dim_retailer_frame, dim_size_frame, fact_sales_frame};

/// Where each relation landed on disk.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub dim_product: PathBuf,
    pub dim_retailer: PathBuf,
    pub dim_size: PathBuf,
    pub fact_sales: PathBuf,
}

impl OutputPaths {
    fn under(output_dir: &Path) -> Self {
        Self {
            dim_product: output_dir.join("dim_product.csv"),
            dim_retailer: output_dir.join("dim_retailer.csv"),
            dim_size: output_dir.join("dim_size.csv"),
            fact_sales: output_dir.join("fact_sales.csv"),
        }
    }
}

/// Write the four relations as headered CSV files under `output_dir`,
/// creating the directory when missing and overwriting existing files.
pub fn write_star_schema(schema: &StarSchema, output_dir: &Path) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let paths = OutputPaths::under(output_dir);
    write_csv(&paths.dim_product, dim_product_frame(&schema.dim_product)?)?;
    write_csv(&paths.dim_retailer, dim_retailer_frame(&schema.dim_retailer)?)?;
    write_csv(&paths.dim_size, dim_size_frame(&schema.dim_size)?)?;
    write_csv(&paths.fact_sales, fact_sales_frame(&schema.fact_sales)?)?;
    Ok(paths)
}

fn write_csv(path: &Path, mut frame: DataFrame) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut frame)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = frame.height(), "relation written");
    Ok(())
}

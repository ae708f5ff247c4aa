//! Staged pipeline orchestration: ingest, classify, assemble, report.
//!
//! Each stage runs inside its own tracing span and logs counts plus
//! duration on completion. Per-record anomalies (rejections, exclusions,
//! coverage gaps) accumulate in the summary; only structural failures
//! (unreadable catalog, failed writes) abort the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use shelf_classify::classify_batch;
use shelf_ingest::{FieldNulls, dedupe_catalog, null_profile, read_catalog};
use shelf_model::{RejectedRecord, StarSchema};
use shelf_report::{OutputPaths, write_star_schema};
use shelf_schema::{assemble, coverage_gaps};

/// What to run and where to put it.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Everything one run produced, for the console summary and tests.
#[derive(Debug)]
pub struct RunSummary {
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    /// Raw records parsed, before deduplication.
    pub records_read: usize,
    pub duplicates_dropped: usize,
    pub null_profile: Vec<FieldNulls>,
    pub rejected: Vec<RejectedRecord>,
    /// Size rows removed by the exclusion filter.
    pub excluded_rows: usize,
    /// Retained size records feeding the star schema.
    pub size_records: usize,
    /// size_group labels outside the downstream allow-list.
    pub coverage_gaps: Vec<&'static str>,
    pub schema: StarSchema,
    /// Relation files written; `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

/// Run the full pipeline over one catalog file.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let ingest_span = info_span!("ingest", catalog = %options.catalog.display());
    let ingest_start = Instant::now();
    let (records, records_read, duplicates_dropped, profile) = ingest_span.in_scope(|| {
        let records = read_catalog(&options.catalog)
            .with_context(|| format!("read catalog {}", options.catalog.display()))?;
        let records_read = records.len();
        let (records, dropped) = dedupe_catalog(records);
        let profile = null_profile(&records);
        Ok::<_, anyhow::Error>((records, records_read, dropped, profile))
    })?;
    info!(
        records = records.len(),
        duplicates_dropped,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let classify_span = info_span!("classify", records = records.len());
    let classify_start = Instant::now();
    let outcome = classify_span.in_scope(|| classify_batch(&records));
    if !outcome.rejected.is_empty() {
        warn!(rejected = outcome.rejected.len(), "records rejected");
    }
    info!(
        size_records = outcome.records.len(),
        excluded = outcome.excluded,
        rejected = outcome.rejected.len(),
        duration_ms = classify_start.elapsed().as_millis(),
        "classify complete"
    );

    let assemble_span = info_span!("assemble", size_records = outcome.records.len());
    let assemble_start = Instant::now();
    let (schema, gaps) = assemble_span.in_scope(|| {
        let schema = assemble(&outcome.records);
        let gaps: Vec<&'static str> = coverage_gaps(&outcome.records).into_iter().collect();
        (schema, gaps)
    });
    if !gaps.is_empty() {
        warn!(size_groups = ?gaps, "size groups outside the allow-list");
    }
    let (products, retailers, sizes, facts) = schema.row_counts();
    info!(
        products,
        retailers,
        sizes,
        facts,
        duration_ms = assemble_start.elapsed().as_millis(),
        "assemble complete"
    );

    let outputs = if options.dry_run {
        info!("dry run, skipping relation output");
        None
    } else {
        let report_span = info_span!("report", output_dir = %options.output_dir.display());
        let report_start = Instant::now();
        let paths = report_span.in_scope(|| write_star_schema(&schema, &options.output_dir))?;
        info!(
            duration_ms = report_start.elapsed().as_millis(),
            "report complete"
        );
        Some(paths)
    };

    Ok(RunSummary {
        catalog: options.catalog.clone(),
        output_dir: options.output_dir.clone(),
        records_read,
        duplicates_dropped,
        null_profile: profile,
        rejected: outcome.rejected,
        excluded_rows: outcome.excluded,
        size_records: outcome.records.len(),
        coverage_gaps: gaps,
        schema,
        outputs,
    })
}

/// Default output directory: `output` beside the catalog file.
pub fn default_output_dir(catalog: &Path) -> PathBuf {
    catalog
        .parent()
        .map_or_else(|| PathBuf::from("output"), |dir| dir.join("output"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir_sits_beside_the_catalog() {
        let dir = default_output_dir(Path::new("/data/catalog.json"));
        assert_eq!(dir, PathBuf::from("/data/output"));
        assert_eq!(
            default_output_dir(Path::new("catalog.json")),
            PathBuf::from("output")
        );
    }
}

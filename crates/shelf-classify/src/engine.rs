use shelf_model::{ProductRecord, RejectReason, RejectedRecord, SizeRecord};
use tracing::debug;

use crate::brand::canonicalize_brand;
use crate::category::{categorize, subcategorize};
use crate::color::classify_color;
use crate::filter::is_excluded;
use crate::metrics::availability_metrics;
use crate::size::{classify_size_group, clean_size_token, size_parts};

/// Review counts above this are feed corruption and get nulled.
const MAX_VALID_REVIEW_COUNT: f64 = 1_000_000.0;

/// Everything the engine produced for one batch.
#[derive(Debug, Default)]
pub struct ClassifyOutcome {
    /// Retained, fully enriched size records in arrival order.
    pub records: Vec<SizeRecord>,
    /// Per-record structural rejections, by batch index.
    pub rejected: Vec<RejectedRecord>,
    /// Size rows dropped by the exclusion filter.
    pub excluded: usize,
}

/// Explode one raw record into its retained size records.
///
/// Classification fields are derived once per product, the size fields per
/// exploded row. Err means the record is structurally unusable; an Ok
/// holding no rows just means an empty size list or full exclusion.
pub fn classify_product(record: &ProductRecord) -> Result<Vec<SizeRecord>, RejectReason> {
    let product_name = record
        .product_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or(RejectReason::MissingProductName)?;

    let (brand_name, sub_brand_name) = canonicalize_brand(record.brand_name.as_deref());
    let category = categorize(product_name);
    let subcategory = subcategorize(product_name, record.description.as_deref());
    let color_group = classify_color(record.color.as_deref());
    let review_count = record
        .review_count
        .filter(|&count| count <= MAX_VALID_REVIEW_COUNT);

    let total_offered_items = record.total_sizes.len() as u32;
    let available_items = record.available_size.len() as u32;
    let available: Vec<String> = record
        .available_size
        .iter()
        .map(|raw| clean_size_token(raw))
        .collect();

    let mut rows = Vec::with_capacity(record.total_sizes.len());
    for raw_size in &record.total_sizes {
        let size = clean_size_token(raw_size);
        let (size_number, size_letter) = size_parts(&size);
        let size_group = classify_size_group(&size, size_number);
        if is_excluded(category, &size) {
            continue;
        }
        let metrics = availability_metrics(total_offered_items, available_items, size_group);
        let is_available = available.contains(&size);
        rows.push(SizeRecord {
            size,
            size_number,
            size_letter,
            is_available,
            size_group,
            total_offered_items: metrics.total_offered_items,
            available_items: metrics.available_items,
            availability_percentage: metrics.availability_percentage,
            status: metrics.status,
            warning_sanction: metrics.warning_sanction,
            brand_name: brand_name.clone(),
            sub_brand_name: sub_brand_name.clone(),
            category,
            subcategory,
            color_group,
            product_name: product_name.to_string(),
            color: record.color.clone(),
            retailer: record.retailer.clone(),
            rating: record.rating,
            review_count,
            mrp: record.mrp,
        });
    }
    Ok(rows)
}

/// Classify a deduplicated batch, accumulating rejections instead of
/// aborting on them.
pub fn classify_batch(records: &[ProductRecord]) -> ClassifyOutcome {
    let mut outcome = ClassifyOutcome::default();
    for (index, record) in records.iter().enumerate() {
        match classify_product(record) {
            Ok(rows) => {
                outcome.excluded += record.total_sizes.len() - rows.len();
                outcome.records.extend(rows);
            }
            Err(reason) => {
                debug!(index, reason = %reason, "record rejected");
                outcome.rejected.push(RejectedRecord { index, reason });
            }
        }
    }
    outcome
}

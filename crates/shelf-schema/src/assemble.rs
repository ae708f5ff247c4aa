use std::collections::BTreeSet;

use tracing::debug;

use shelf_model::{
    DimProductRow, DimRetailerRow, DimSizeRow, FactSalesRow, SizeRecord, StarSchema,
};

/// Project retained size records into the star schema.
///
/// Surrogate keys are positional: row i (arrival order) takes product_id =
/// retailer_id = size_id = sales_id = i + 1, so every relation's key column
/// is dense 1..N within one run and reordering the input changes the keys.
/// Each relation is then deduplicated by full-row equality.
pub fn assemble(records: &[SizeRecord]) -> StarSchema {
    let mut schema = StarSchema::default();
    for (index, record) in records.iter().enumerate() {
        let id = (index + 1) as u32;
        schema.dim_product.push(DimProductRow {
            brand_name: record.brand_name.clone(),
            sub_brand_name: record.sub_brand_name.clone(),
            color: record.color.clone(),
            product_name: record.product_name.clone(),
            category: record.category,
            subcategory: record.subcategory,
            product_id: id,
            is_available: record.is_available,
        });
        schema.dim_retailer.push(DimRetailerRow {
            retailer: record.retailer.clone(),
            retailer_id: id,
        });
        schema.dim_size.push(DimSizeRow {
            size: record.size.clone(),
            size_number: record.size_number,
            size_letter: record.size_letter.clone(),
            is_available: record.is_available,
            size_id: id,
            size_group: record.size_group,
        });
        schema.fact_sales.push(FactSalesRow {
            sales_id: id,
            product_id: id,
            retailer_id: id,
            size_id: id,
            rating: record.rating,
            review_count: record.review_count,
            is_available: record.is_available,
            sales_amount: record.mrp,
            total_offered_items: record.total_offered_items,
            available_items: record.available_items,
            availability_percentage: record.availability_percentage,
            status: record.status,
            warning_sanction: record.warning_sanction,
        });
    }

    dedupe_rows(&mut schema.dim_product, dim_product_key);
    dedupe_rows(&mut schema.dim_retailer, dim_retailer_key);
    dedupe_rows(&mut schema.dim_size, dim_size_key);
    dedupe_rows(&mut schema.fact_sales, fact_sales_key);

    let (products, retailers, sizes, facts) = schema.row_counts();
    debug!(products, retailers, sizes, facts, "star schema assembled");
    schema
}

/// Keep the first row per composite key, preserving order.
fn dedupe_rows<R>(rows: &mut Vec<R>, key: impl Fn(&R) -> String) {
    let mut seen = BTreeSet::new();
    rows.retain(|row| seen.insert(key(row)));
}

fn opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn dim_product_key(row: &DimProductRow) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}",
        row.brand_name,
        row.sub_brand_name,
        row.color.as_deref().unwrap_or(""),
        row.product_name,
        row.category,
        row.subcategory.map_or("", |sub| sub.as_str()),
        row.product_id,
        row.is_available,
    )
}

fn dim_retailer_key(row: &DimRetailerRow) -> String {
    format!(
        "{}|{}",
        row.retailer.as_deref().unwrap_or(""),
        row.retailer_id
    )
}

fn dim_size_key(row: &DimSizeRow) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        row.size,
        row.size_number.map(|n| n.to_string()).unwrap_or_default(),
        row.size_letter,
        row.is_available,
        row.size_id,
        row.size_group,
    )
}

fn fact_sales_key(row: &FactSalesRow) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        row.sales_id,
        row.product_id,
        row.retailer_id,
        row.size_id,
        opt_f64(row.rating),
        opt_f64(row.review_count),
        row.is_available,
        opt_f64(row.sales_amount),
        row.total_offered_items,
        row.available_items,
        row.availability_percentage,
        row.status,
        row.warning_sanction.map_or("", |status| status.as_str()),
    )
}

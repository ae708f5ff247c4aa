use serde::{Deserialize, Serialize};

use crate::record::{AvailabilityStatus, SizeGroup};
use crate::taxonomy::{Category, Subcategory};

/// Product dimension row. Column order matches the persisted relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimProductRow {
    pub brand_name: String,
    pub sub_brand_name: String,
    pub color: Option<String>,
    pub product_name: String,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub product_id: u32,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimRetailerRow {
    pub retailer: Option<String>,
    pub retailer_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimSizeRow {
    pub size: String,
    pub size_number: Option<i64>,
    pub size_letter: String,
    pub is_available: bool,
    pub size_id: u32,
    pub size_group: SizeGroup,
}

/// Fact row, one per retained size record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSalesRow {
    pub sales_id: u32,
    pub product_id: u32,
    pub retailer_id: u32,
    pub size_id: u32,
    pub rating: Option<f64>,
    pub review_count: Option<f64>,
    pub is_available: bool,
    /// Maximum retail price, kept under its analytics name.
    pub sales_amount: Option<f64>,
    pub total_offered_items: u32,
    pub available_items: u32,
    pub availability_percentage: f64,
    pub status: AvailabilityStatus,
    pub warning_sanction: Option<AvailabilityStatus>,
}

/// The four deduplicated output relations of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSchema {
    pub dim_product: Vec<DimProductRow>,
    pub dim_retailer: Vec<DimRetailerRow>,
    pub dim_size: Vec<DimSizeRow>,
    pub fact_sales: Vec<FactSalesRow>,
}

impl StarSchema {
    /// Row counts as (dim_product, dim_retailer, dim_size, fact_sales).
    pub fn row_counts(&self) -> (usize, usize, usize, usize) {
        (
            self.dim_product.len(),
            self.dim_retailer.len(),
            self.dim_size.len(),
            self.fact_sales.len(),
        )
    }
}

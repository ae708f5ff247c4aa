//! DataFrame construction for the output relations.
//!
//! Column order matches the relation row types; enum cells use their
//! canonical labels and absent optionals become nulls (empty CSV cells).

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use shelf_model::{DimProductRow, DimRetailerRow, DimSizeRow, FactSalesRow};

pub fn dim_product_frame(rows: &[DimProductRow]) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        Series::new(
            "brand_name".into(),
            rows.iter().map(|r| r.brand_name.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "sub_brand_name".into(),
            rows.iter()
                .map(|r| r.sub_brand_name.as_str())
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "color".into(),
            rows.iter().map(|r| r.color.as_deref()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "product_name".into(),
            rows.iter()
                .map(|r| r.product_name.as_str())
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "category".into(),
            rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "subcategory".into(),
            rows.iter()
                .map(|r| r.subcategory.map(|sub| sub.as_str()))
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "product_id".into(),
            rows.iter().map(|r| r.product_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "is_available".into(),
            rows.iter().map(|r| r.is_available).collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).context("build dim_product frame")
}

pub fn dim_retailer_frame(rows: &[DimRetailerRow]) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        Series::new(
            "retailer".into(),
            rows.iter().map(|r| r.retailer.as_deref()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "retailer_id".into(),
            rows.iter().map(|r| r.retailer_id).collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).context("build dim_retailer frame")
}

pub fn dim_size_frame(rows: &[DimSizeRow]) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        Series::new(
            "size".into(),
            rows.iter().map(|r| r.size.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "size_number".into(),
            rows.iter().map(|r| r.size_number).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "size_letter".into(),
            rows.iter()
                .map(|r| r.size_letter.as_str())
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "is_available".into(),
            rows.iter().map(|r| r.is_available).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "size_id".into(),
            rows.iter().map(|r| r.size_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "size_group".into(),
            rows.iter()
                .map(|r| r.size_group.as_str())
                .collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).context("build dim_size frame")
}

pub fn fact_sales_frame(rows: &[FactSalesRow]) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        Series::new(
            "sales_id".into(),
            rows.iter().map(|r| r.sales_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "product_id".into(),
            rows.iter().map(|r| r.product_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "retailer_id".into(),
            rows.iter().map(|r| r.retailer_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "size_id".into(),
            rows.iter().map(|r| r.size_id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "rating".into(),
            rows.iter().map(|r| r.rating).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "review_count".into(),
            rows.iter().map(|r| r.review_count).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "is_available".into(),
            rows.iter().map(|r| r.is_available).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "sales_amount".into(),
            rows.iter().map(|r| r.sales_amount).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "total_offered_items".into(),
            rows.iter()
                .map(|r| r.total_offered_items)
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "available_items".into(),
            rows.iter().map(|r| r.available_items).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "availability_percentage".into(),
            rows.iter()
                .map(|r| r.availability_percentage)
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "status".into(),
            rows.iter().map(|r| r.status.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "warning_sanction".into(),
            rows.iter()
                .map(|r| r.warning_sanction.map_or("", |status| status.as_str()))
                .collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).context("build fact_sales frame")
}

//! CSV persistence tests: file layout, headers, and cell rendering for
//! enum labels, optionals, and the empty-string override column.

use shelf_model::{
    AvailabilityStatus, Category, DimProductRow, DimRetailerRow, DimSizeRow, FactSalesRow,
    SizeGroup, StarSchema, Subcategory,
};
use shelf_report::write_star_schema;

fn sample_schema() -> StarSchema {
    StarSchema {
        dim_product: vec![DimProductRow {
            brand_name: "Wacoal".to_string(),
            sub_brand_name: "b.tempt'd".to_string(),
            color: Some("Navy".to_string()),
            product_name: "Lace Plunge Bra".to_string(),
            category: Category::Bras,
            subcategory: Some(Subcategory::Lace),
            product_id: 1,
            is_available: true,
        }],
        dim_retailer: vec![DimRetailerRow {
            retailer: Some("Amazon".to_string()),
            retailer_id: 1,
        }],
        dim_size: vec![
            DimSizeRow {
                size: "32B".to_string(),
                size_number: Some(32),
                size_letter: "B".to_string(),
                is_available: true,
                size_id: 1,
                size_group: SizeGroup::Small,
            },
            DimSizeRow {
                size: "XL".to_string(),
                size_number: None,
                size_letter: "XL".to_string(),
                is_available: false,
                size_id: 2,
                size_group: SizeGroup::NotBras,
            },
        ],
        fact_sales: vec![FactSalesRow {
            sales_id: 1,
            product_id: 1,
            retailer_id: 1,
            size_id: 1,
            rating: Some(4.2),
            review_count: None,
            is_available: true,
            sales_amount: Some(24.0),
            total_offered_items: 2,
            available_items: 1,
            availability_percentage: 0.5,
            status: AvailabilityStatus::Ok,
            warning_sanction: None,
        }],
    }
}

#[test]
fn writes_all_four_relations() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_star_schema(&sample_schema(), dir.path()).unwrap();

    let dim_product = std::fs::read_to_string(&paths.dim_product).unwrap();
    insta::assert_snapshot!(dim_product.trim_end(), @r"
    brand_name,sub_brand_name,color,product_name,category,subcategory,product_id,is_available
    Wacoal,b.tempt'd,Navy,Lace Plunge Bra,Bras,Lace,1,true
    ");

    let dim_retailer = std::fs::read_to_string(&paths.dim_retailer).unwrap();
    insta::assert_snapshot!(dim_retailer.trim_end(), @r"
    retailer,retailer_id
    Amazon,1
    ");

    let dim_size = std::fs::read_to_string(&paths.dim_size).unwrap();
    insta::assert_snapshot!(dim_size.trim_end(), @r"
    size,size_number,size_letter,is_available,size_id,size_group
    32B,32,B,true,1,Small
    XL,,XL,false,2,Not Bras
    ");

    let fact_sales = std::fs::read_to_string(&paths.fact_sales).unwrap();
    insta::assert_snapshot!(fact_sales.trim_end(), @r"
    sales_id,product_id,retailer_id,size_id,rating,review_count,is_available,sales_amount,total_offered_items,available_items,availability_percentage,status,warning_sanction
    1,1,1,1,4.2,,true,24.0,2,1,0.5,OK,
    ");
}

#[test]
fn extra_large_override_renders_its_label() {
    let mut schema = sample_schema();
    schema.fact_sales[0].status = AvailabilityStatus::Sanction;
    schema.fact_sales[0].warning_sanction = Some(AvailabilityStatus::Sanction);
    schema.fact_sales[0].availability_percentage = 0.25;

    let dir = tempfile::tempdir().unwrap();
    let paths = write_star_schema(&schema, dir.path()).unwrap();
    let fact_sales = std::fs::read_to_string(&paths.fact_sales).unwrap();
    let last = fact_sales.trim_end().lines().last().unwrap();
    assert!(last.ends_with("0.25,Sanction,Sanction"));
}

#[test]
fn empty_schema_writes_headers_only() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_star_schema(&StarSchema::default(), dir.path()).unwrap();
    let fact_sales = std::fs::read_to_string(&paths.fact_sales).unwrap();
    insta::assert_snapshot!(
        fact_sales.trim_end(),
        @"sales_id,product_id,retailer_id,size_id,rating,review_count,is_available,sales_amount,total_offered_items,available_items,availability_percentage,status,warning_sanction"
    );
    let dim_size = std::fs::read_to_string(&paths.dim_size).unwrap();
    insta::assert_snapshot!(
        dim_size.trim_end(),
        @"size,size_number,size_letter,is_available,size_id,size_group"
    );
}

#[test]
fn overwrites_existing_relation_files() {
    let dir = tempfile::tempdir().unwrap();
    write_star_schema(&sample_schema(), dir.path()).unwrap();
    let paths = write_star_schema(&StarSchema::default(), dir.path()).unwrap();
    let dim_retailer = std::fs::read_to_string(&paths.dim_retailer).unwrap();
    assert_eq!(dim_retailer.trim_end(), "retailer,retailer_id");
}

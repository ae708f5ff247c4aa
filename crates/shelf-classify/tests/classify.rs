//! End-to-end checks for the classification engine: size cleaning,
//! rule precedence, metrics thresholds, and the exclusion filter.

use proptest::prelude::*;

use shelf_classify::brand::canonicalize_brand;
use shelf_classify::color::classify_color;
use shelf_classify::size::{classify_size_group, clean_size_token, size_parts};
use shelf_classify::{classify_batch, classify_product};
use shelf_model::{AvailabilityStatus, Category, ColorGroup, ProductRecord, SizeGroup};

fn record(name: &str, sizes: &[&str], available: &[&str]) -> ProductRecord {
    ProductRecord {
        product_name: Some(name.to_string()),
        total_sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        available_size: available.iter().map(|s| (*s).to_string()).collect(),
        ..ProductRecord::default()
    }
}

#[test]
fn explosion_count_matches_offered_items() {
    let product = record("Cotton Panty", &["XS", "S", "M", "L"], &["S", "M"]);
    let rows = classify_product(&product).unwrap();
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.total_offered_items, 4);
        assert_eq!(row.available_items, 2);
        assert!(row.available_items <= row.total_offered_items);
        assert_eq!(row.availability_percentage, 0.5);
        assert_eq!(row.status, AvailabilityStatus::Ok);
    }
}

#[test]
fn underbust_31_is_small_never_not_bras() {
    let (number, _) = size_parts(&clean_size_token("31"));
    assert_eq!(classify_size_group("31", number), SizeGroup::Small);
}

#[test]
fn bra_beats_legging_by_rule_order() {
    let product = record("Sports Bra and Legging Set", &["M"], &[]);
    let rows = classify_product(&product).unwrap();
    assert_eq!(rows[0].category, Category::Bras);
}

#[test]
fn brand_canonicalization_matches_known_pairs() {
    assert_eq!(
        canonicalize_brand(Some("B.TEMPT'D")),
        ("Wacoal".to_string(), "b.tempt'd".to_string())
    );
    assert_eq!(
        canonicalize_brand(Some("unknown brand xyz")),
        ("unknown brand xyz".to_string(), String::new())
    );
}

#[test]
fn color_classification_handles_compound_and_absent_text() {
    assert_eq!(classify_color(Some("Midnight Navy Blue")), ColorGroup::Blue);
    assert_eq!(classify_color(None), ColorGroup::Unknown);
}

#[test]
fn exclusion_depends_on_category() {
    let bra = record("Plunge Bra", &["s", "32B"], &[]);
    let rows = classify_product(&bra).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].size, "32B");

    let panty = record("Cheeky Panty", &["s", "32B"], &[]);
    let rows = classify_product(&panty).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn three_of_ten_rounds_to_warning() {
    let sizes: Vec<String> = (0..10).map(|i| format!("3{i}")).collect();
    let size_refs: Vec<&str> = sizes.iter().map(String::as_str).collect();
    let product = record("Chemise", &size_refs, &["30", "31", "32"]);
    let rows = classify_product(&product).unwrap();
    assert_eq!(rows[0].availability_percentage, 0.30);
    assert_eq!(rows[0].status, AvailabilityStatus::Warning);
}

#[test]
fn batch_keeps_arrival_order_across_products() {
    let batch = vec![
        record("Demi Bra", &["32B", "34B"], &["32B"]),
        record("Thong", &["M"], &["M"]),
    ];
    let outcome = classify_batch(&batch);
    let sizes: Vec<&str> = outcome.records.iter().map(|r| r.size.as_str()).collect();
    assert_eq!(sizes, ["32B", "34B", "M"]);
    assert!(outcome.rejected.is_empty());
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(raw in ".{0,40}") {
        let once = clean_size_token(&raw);
        prop_assert_eq!(clean_size_token(&once), once.clone());
    }

    #[test]
    fn cleaned_tokens_are_alphanumeric(raw in ".{0,40}") {
        prop_assert!(clean_size_token(&raw).chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

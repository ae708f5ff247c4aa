use shelf_model::ProductRecord;

/// Null count for one raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNulls {
    pub field: &'static str,
    pub nulls: usize,
}

/// Per-field null counts over the raw batch, in schema order.
///
/// The two size lists count empty as null — the parser folds an absent
/// field and an empty list into the same representation.
pub fn null_profile(records: &[ProductRecord]) -> Vec<FieldNulls> {
    let fields = [
        "product_name",
        "description",
        "brand_name",
        "color",
        "rating",
        "review_count",
        "mrp",
        "retailer",
        "total_sizes",
        "available_size",
    ];
    let mut profile: Vec<FieldNulls> = fields
        .into_iter()
        .map(|field| FieldNulls { field, nulls: 0 })
        .collect();
    for record in records {
        let missing = [
            record.product_name.is_none(),
            record.description.is_none(),
            record.brand_name.is_none(),
            record.color.is_none(),
            record.rating.is_none(),
            record.review_count.is_none(),
            record.mrp.is_none(),
            record.retailer.is_none(),
            record.total_sizes.is_empty(),
            record.available_size.is_empty(),
        ];
        for (entry, absent) in profile.iter_mut().zip(missing) {
            entry.nulls += usize::from(absent);
        }
    }
    profile
}

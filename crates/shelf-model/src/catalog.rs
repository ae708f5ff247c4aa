use serde::{Deserialize, Deserializer, Serialize};

/// One raw catalog entry as scraped from a retailer feed.
///
/// Every field is optional: upstream feeds drop attributes freely and a
/// sparse record is still worth classifying. Records carry no inherent
/// identity; duplicates are detected by full-row equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<f64>,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub retailer: Option<String>,
    /// Sizes the product is offered in. Feeds send either a JSON array of
    /// tokens or one comma-delimited string; both forms normalize here.
    #[serde(default, deserialize_with = "size_list")]
    pub total_sizes: Vec<String>,
    /// Subset of `total_sizes` currently in stock, same encoding.
    #[serde(default, deserialize_with = "size_list")]
    pub available_size: Vec<String>,
}

impl ProductRecord {
    /// Composite identity string used for full-row deduplication.
    pub fn dedup_key(&self) -> String {
        let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        [
            self.product_name.as_deref().unwrap_or("").to_string(),
            self.description.as_deref().unwrap_or("").to_string(),
            self.brand_name.as_deref().unwrap_or("").to_string(),
            self.color.as_deref().unwrap_or("").to_string(),
            number(self.rating),
            number(self.review_count),
            number(self.mrp),
            self.retailer.as_deref().unwrap_or("").to_string(),
            self.total_sizes.join(","),
            self.available_size.join(","),
        ]
        .join("|")
    }
}

fn size_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SizeList {
        Tokens(Vec<String>),
        Delimited(String),
    }

    Ok(match Option::<SizeList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(SizeList::Tokens(tokens)) => tokens,
        Some(SizeList::Delimited(joined)) if joined.trim().is_empty() => Vec::new(),
        Some(SizeList::Delimited(joined)) => joined
            .split(',')
            .map(|token| token.trim().to_string())
            .collect(),
    })
}

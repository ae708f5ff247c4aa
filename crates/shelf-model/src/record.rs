use serde::{Deserialize, Serialize};
use std::fmt;

use crate::taxonomy::{Category, ColorGroup, Subcategory};

/// Coarse size bucket derived from a cleaned size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeGroup {
    Small,
    Medium,
    Large,
    ExtraLarge,
    NotBras,
    Unknown,
}

impl SizeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeGroup::Small => "Small",
            SizeGroup::Medium => "Medium",
            SizeGroup::Large => "Large",
            SizeGroup::ExtraLarge => "Extra Large",
            SizeGroup::NotBras => "Not Bras",
            SizeGroup::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability-risk status code derived from the availability ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Ok,
    Warning,
    Sanction,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Ok => "OK",
            AvailabilityStatus::Warning => "Warning",
            AvailabilityStatus::Sanction => "Sanction",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One product×size combination after exploding a product's size list,
/// enriched with every derived classification field.
///
/// Produced once, never mutated; the exclusion filter is the only path
/// that removes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    /// Cleaned size token (whitespace, parentheticals, punctuation removed).
    pub size: String,
    /// Leading digit run of the token, when one exists and fits an i64.
    pub size_number: Option<i64>,
    /// Trailing alphabetic run of the token; empty when none.
    pub size_letter: String,
    /// Whether the cleaned token appears in the cleaned available list.
    pub is_available: bool,
    pub size_group: SizeGroup,
    pub total_offered_items: u32,
    pub available_items: u32,
    /// available_items / total_offered_items, rounded to 2 decimals.
    pub availability_percentage: f64,
    pub status: AvailabilityStatus,
    /// Same thresholds as `status`, kept only for Extra Large sizes.
    pub warning_sanction: Option<AvailabilityStatus>,
    /// Canonical brand; unmapped brands pass through lowered and trimmed.
    pub brand_name: String,
    /// Canonical sub-brand; empty when the brand has none.
    pub sub_brand_name: String,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub color_group: ColorGroup,
    pub product_name: String,
    /// Raw color text, carried for the product dimension.
    pub color: Option<String>,
    pub retailer: Option<String>,
    pub rating: Option<f64>,
    /// Review count after implausible values (> 1,000,000) are nulled.
    pub review_count: Option<f64>,
    pub mrp: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_output_vocabulary() {
        assert_eq!(SizeGroup::ExtraLarge.as_str(), "Extra Large");
        assert_eq!(SizeGroup::NotBras.as_str(), "Not Bras");
        assert_eq!(AvailabilityStatus::Ok.as_str(), "OK");
        assert_eq!(Category::SleepwearLingerie.as_str(), "Sleepwear and Lingerie");
        assert_eq!(Category::TopsSport.as_str(), "Tops Sport");
        assert_eq!(ColorGroup::Unknown.as_str(), "unknown");
    }
}

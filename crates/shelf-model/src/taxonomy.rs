use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category assigned by the ordered name rules.
///
/// `Bralette` never comes out of the shipped rules ("bralette" in a product
/// name resolves to `Bras` first) but is part of the exclusion filter's
/// bra-like set, so the variant stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Bras,
    Tops,
    Panties,
    Bikinis,
    SleepwearLingerie,
    TopsSport,
    Bralette,
    Other,
}

impl Category {
    /// Canonical label as it appears in the output relations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bras => "Bras",
            Category::Tops => "Tops",
            Category::Panties => "Panties",
            Category::Bikinis => "Bikinis",
            Category::SleepwearLingerie => "Sleepwear and Lingerie",
            Category::TopsSport => "Tops Sport",
            Category::Bralette => "Bralette",
            Category::Other => "Other",
        }
    }

    /// Categories subject to the non-bra-sizing exclusion filter.
    pub fn is_bra_like(&self) -> bool {
        matches!(self, Category::Bras | Category::Bralette)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Material/style tag assigned by the subcategory rules. At most one per
/// product; absence is a valid outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subcategory {
    Seamless,
    Lace,
    Mesh,
    Crochet,
    Embroidered,
    Ruched,
    HighWaist,
    LowRise,
    MidRise,
    Adjustable,
    PushUp,
    Padded,
    Unlined,
    Wireless,
    Nylon,
    Spandex,
    Cotton,
    Satin,
    Polyamide,
    Elastane,
}

impl Subcategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcategory::Seamless => "Seamless",
            Subcategory::Lace => "Lace",
            Subcategory::Mesh => "Mesh",
            Subcategory::Crochet => "Crochet",
            Subcategory::Embroidered => "Embroidered",
            Subcategory::Ruched => "Ruched",
            Subcategory::HighWaist => "High-Waist",
            Subcategory::LowRise => "Low-Rise",
            Subcategory::MidRise => "Mid-Rise",
            Subcategory::Adjustable => "Adjustable",
            Subcategory::PushUp => "Push-Up",
            Subcategory::Padded => "Padded",
            Subcategory::Unlined => "Unlined",
            Subcategory::Wireless => "Wireless",
            Subcategory::Nylon => "Nylon",
            Subcategory::Spandex => "Spandex",
            Subcategory::Cotton => "Cotton",
            Subcategory::Satin => "Satin",
            Subcategory::Polyamide => "Polyamide",
            Subcategory::Elastane => "Elastane",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical color bucket. Labels are lowercase in the output relations,
/// with `unknown` covering absent or unmatched color text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
    Orange,
    Brown,
    Black,
    White,
    Grey,
    Multi,
    Unknown,
}

impl ColorGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorGroup::Red => "red",
            ColorGroup::Blue => "blue",
            ColorGroup::Green => "green",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Pink => "pink",
            ColorGroup::Purple => "purple",
            ColorGroup::Orange => "orange",
            ColorGroup::Brown => "brown",
            ColorGroup::Black => "black",
            ColorGroup::White => "white",
            ColorGroup::Grey => "grey",
            ColorGroup::Multi => "multi",
            ColorGroup::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

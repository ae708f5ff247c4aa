use std::sync::LazyLock;

use shelf_model::{Category, Subcategory};

use crate::rules::PatternTable;

/// Ordered whole-word name rules. "bralette" sits in both the Bras and
/// Tops patterns; Bras wins by position.
static CATEGORY_RULES: LazyLock<PatternTable<Category>> = LazyLock::new(|| {
    PatternTable::new(&[
        (
            r"(?i)\b(bra|push-up|plunge|demi|balconette|multi-way|embellished underwire bra|bralette)\b",
            Category::Bras,
        ),
        (
            r"(?i)\b(bandeau|triangle bralette|bralette)\b",
            Category::Tops,
        ),
        (
            r"(?i)\b(hipster|cheeky|cheekster|boyshort|thong|hiphugger|boybrief|v-string|shortie|brief|panty|hipkini|cheekini|tanga|high cut brief|high cut briefs)\b",
            Category::Panties,
        ),
        (r"(?i)\b(bikini)\b", Category::Bikinis),
        (r"(?i)\b(vikini|v kini)\b", Category::Bikinis),
        (
            r"(?i)\b(slip|chemise|babydoll|teddy|romper|camisole|bodysuit|bustier|garter belt)\b",
            Category::SleepwearLingerie,
        ),
        (
            r"(?i)\b(legging|short|jogger|tank|top|hoodie|tee|shirt|camisole|crop|sports bra|shorts|tank top)\b",
            Category::TopsSport,
        ),
    ])
});

/// Material/style rules, evaluated against name or description.
static SUBCATEGORY_RULES: LazyLock<PatternTable<Subcategory>> = LazyLock::new(|| {
    PatternTable::new(&[
        (r"(?i)\b(seamless)\b", Subcategory::Seamless),
        (r"(?i)\b(lace)\b", Subcategory::Lace),
        (r"(?i)\b(mesh)\b", Subcategory::Mesh),
        (r"(?i)\b(crochet)\b", Subcategory::Crochet),
        (r"(?i)\b(embroidered|embroidery)\b", Subcategory::Embroidered),
        (r"(?i)\b(ruched)\b", Subcategory::Ruched),
        (r"(?i)\b(high-waist|high waist)\b", Subcategory::HighWaist),
        (r"(?i)\b(low-rise|low rise)\b", Subcategory::LowRise),
        (r"(?i)\b(mid-rise|mid rise)\b", Subcategory::MidRise),
        (r"(?i)\b(adjustable)\b", Subcategory::Adjustable),
        (r"(?i)\b(push-up|push up)\b", Subcategory::PushUp),
        (r"(?i)\b(padded)\b", Subcategory::Padded),
        (r"(?i)\b(unlined)\b", Subcategory::Unlined),
        (r"(?i)\b(wireless)\b", Subcategory::Wireless),
        (r"(?i)\b(nylon)\b", Subcategory::Nylon),
        (r"(?i)\b(spandex)\b", Subcategory::Spandex),
        (r"(?i)\b(cotton)\b", Subcategory::Cotton),
        (r"(?i)\b(satin)\b", Subcategory::Satin),
        (r"(?i)\b(polyamide)\b", Subcategory::Polyamide),
        (r"(?i)\b(elastane)\b", Subcategory::Elastane),
    ])
});

/// Category for a product name; the catch-all is `Other`.
pub fn categorize(product_name: &str) -> Category {
    CATEGORY_RULES
        .first_match(product_name)
        .unwrap_or(Category::Other)
}

/// At most one material/style tag, scanning name and description under
/// each rule before moving to the next. No catch-all; None is valid.
pub fn subcategorize(product_name: &str, description: Option<&str>) -> Option<Subcategory> {
    SUBCATEGORY_RULES.first_match_any(&[product_name, description.unwrap_or("")])
}

/// The name rules, for console rule listings.
pub fn category_rules() -> Vec<(&'static str, Category)> {
    CATEGORY_RULES.entries()
}

/// The material/style rules, for console rule listings.
pub fn subcategory_rules() -> Vec<(&'static str, Subcategory)> {
    SUBCATEGORY_RULES.entries()
}

use shelf_model::Category;

/// Non-bra sizing tokens. A bra-like record carrying one of these as its
/// stored size is a listing artifact, not a real bra offer.
pub const EXCLUDED_SIZES: [&str; 26] = [
    "xs", "s", "m", "l", "xl", "xxl", "xlarge", "6", "7", "8", "9", "10", "2", "4", "12", "a",
    "b", "c", "d", "dd", "ddd", "xsmall", "14", "xxsmall", "aaa", "bc",
];

/// Exclusion filter: drop the row when the category is bra-like and the
/// stored size token is on the list (exact, case-sensitive).
pub fn is_excluded(category: Category, size: &str) -> bool {
    category.is_bra_like() && EXCLUDED_SIZES.contains(&size)
}

use std::sync::LazyLock;

use regex::Regex;

use shelf_model::SizeGroup;

use crate::rules::PatternTable;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("invalid parenthetical regex"));

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("invalid digit-run regex"));

static TRAILING_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]+)$").expect("invalid letter-run regex"));

/// Underbust bands checked before the token-shape rules.
const SIZE_BANDS: [(i64, i64, SizeGroup); 4] = [
    (30, 32, SizeGroup::Small),
    (34, 36, SizeGroup::Medium),
    (38, 40, SizeGroup::Large),
    (42, 46, SizeGroup::ExtraLarge),
];

/// Token shapes that mark non-bra sizing: apparel letter sizes, youth
/// numeric sizes 6-9, and bare cup-letter runs.
static SIZE_SHAPE_RULES: LazyLock<PatternTable<SizeGroup>> = LazyLock::new(|| {
    PatternTable::new(&[
        (r"(?i)^[smlx]+$", SizeGroup::NotBras),
        (r"^[6-9]+$", SizeGroup::NotBras),
        (r"^[A-Z]+$", SizeGroup::NotBras),
    ])
});

/// Canonicalize one raw size token: drop all whitespace, strip
/// parenthetical annotations, keep only ASCII alphanumerics.
///
/// The output is pure alphanumeric, so cleaning a cleaned token is a no-op.
pub fn clean_size_token(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let stripped = PARENTHETICAL.replace_all(&compact, "");
    stripped
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Split a cleaned token into its leading digit run (when it fits an i64)
/// and trailing alphabetic run (empty when none).
pub fn size_parts(token: &str) -> (Option<i64>, String) {
    let number = LEADING_DIGITS
        .find(token)
        .and_then(|run| run.as_str().parse::<i64>().ok());
    let letter = TRAILING_LETTERS
        .find(token)
        .map(|run| run.as_str().to_string())
        .unwrap_or_default();
    (number, letter)
}

/// Coarse size group for a cleaned token. Numeric bands are tried first,
/// then the shape rules; anything left is Unknown.
pub fn classify_size_group(token: &str, size_number: Option<i64>) -> SizeGroup {
    if let Some(number) = size_number {
        for (low, high, group) in SIZE_BANDS {
            if (low..=high).contains(&number) {
                return group;
            }
        }
    }
    SIZE_SHAPE_RULES
        .first_match(token)
        .unwrap_or(SizeGroup::Unknown)
}

/// The numeric bands, for console rule listings.
pub fn size_bands() -> [(i64, i64, SizeGroup); 4] {
    SIZE_BANDS
}

/// The shape rules, for console rule listings.
pub fn shape_rules() -> Vec<(&'static str, SizeGroup)> {
    SIZE_SHAPE_RULES.entries()
}

use std::sync::LazyLock;

use shelf_model::ColorGroup;

use crate::rules::PatternTable;

/// Shade keywords per bucket, tested as substrings of the lowered color
/// text in declaration order.
static COLOR_RULES: LazyLock<PatternTable<ColorGroup>> = LazyLock::new(|| {
    PatternTable::new(&[
        ("red|ruby|crimson|candy apple", ColorGroup::Red),
        ("blue|navy|cerulean|indigo|aqua|cobalt", ColorGroup::Blue),
        ("green|teal|jade|mint|basil|olive", ColorGroup::Green),
        ("yellow|gold|lemon|chartreuse", ColorGroup::Yellow),
        ("pink|fuchsia|mauve|rose|bubblegum", ColorGroup::Pink),
        ("purple|violet|lavender|plum|amethyst", ColorGroup::Purple),
        ("orange|peach|coral|apricot|cinnamon", ColorGroup::Orange),
        ("brown|taupe|chocolate|bronze|cappuccino", ColorGroup::Brown),
        ("black|charcoal|ebony", ColorGroup::Black),
        ("white|ivory|cream", ColorGroup::White),
        ("grey|silver|smokey|slate", ColorGroup::Grey),
        ("multi", ColorGroup::Multi),
    ])
});

/// Color bucket for raw color text; absent or unmatched reads unknown.
pub fn classify_color(color: Option<&str>) -> ColorGroup {
    match color {
        None => ColorGroup::Unknown,
        Some(text) => COLOR_RULES
            .first_match(&text.to_lowercase())
            .unwrap_or(ColorGroup::Unknown),
    }
}

/// The color buckets, for console rule listings.
pub fn color_rules() -> Vec<(&'static str, ColorGroup)> {
    COLOR_RULES.entries()
}

use regex::Regex;

/// Ordered first-match-wins rule table pairing compiled patterns with the
/// label each assigns. The category, subcategory, color, and size-shape
/// classifiers all share this scan instead of duplicating it.
pub struct PatternTable<L> {
    rules: Vec<(Regex, L)>,
}

impl<L: Copy> PatternTable<L> {
    /// Compile `(pattern, label)` pairs in declaration order.
    ///
    /// Panics on an invalid pattern; tables are built once inside
    /// `LazyLock` statics from patterns fixed at compile time.
    pub fn new(rules: &[(&str, L)]) -> Self {
        let rules = rules
            .iter()
            .map(|&(pattern, label)| {
                (Regex::new(pattern).expect("invalid rule pattern"), label)
            })
            .collect();
        Self { rules }
    }

    /// Label of the first rule whose pattern matches `text`.
    pub fn first_match(&self, text: &str) -> Option<L> {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|&(_, label)| label)
    }

    /// Label of the first rule whose pattern matches any of `texts`.
    /// Rule order outranks text order: rule 1 against the second text
    /// beats rule 2 against the first.
    pub fn first_match_any(&self, texts: &[&str]) -> Option<L> {
        self.rules
            .iter()
            .find(|(pattern, _)| texts.iter().any(|text| pattern.is_match(text)))
            .map(|&(_, label)| label)
    }

    /// Source patterns with their labels, for console rule listings.
    pub fn entries(&self) -> Vec<(&str, L)> {
        self.rules
            .iter()
            .map(|(pattern, label)| (pattern.as_str(), *label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_rule_wins() {
        let table = PatternTable::new(&[("a", 1u8), ("b", 2u8)]);
        assert_eq!(table.first_match("ba"), Some(1));
        assert_eq!(table.first_match("b"), Some(2));
        assert_eq!(table.first_match("c"), None);
    }

    #[test]
    fn any_text_scan_is_rule_major() {
        let table = PatternTable::new(&[("a", 1u8), ("b", 2u8)]);
        // Rule 1 matches the second text; rule 2 would match the first.
        assert_eq!(table.first_match_any(&["b", "a"]), Some(1));
        assert_eq!(table.first_match_any(&["c", "c"]), None);
    }
}

use std::collections::BTreeSet;

use shelf_model::SizeRecord;

/// size_group labels downstream consumers already handle. A run producing
/// anything outside this list has a rule-coverage gap worth surfacing;
/// "Not Bras" sits outside it on purpose.
pub const SIZE_GROUP_ALLOWLIST: [&str; 21] = [
    "Small",
    "Medium",
    "Large",
    "Extra Large",
    "Unknown",
    "XXS",
    "XS",
    "S",
    "M",
    "L",
    "XL",
    "XXL",
    "true",
    "XLarge",
    "2426Plus",
    "1XPlus",
    "1XApparel",
    "2XApparel",
    "3XApparel",
    "false",
    "OK",
];

/// Distinct size_group labels outside the allow-list. Diagnostic only;
/// never fails the run.
pub fn coverage_gaps(records: &[SizeRecord]) -> BTreeSet<&'static str> {
    records
        .iter()
        .map(|record| record.size_group.as_str())
        .filter(|label| !SIZE_GROUP_ALLOWLIST.contains(label))
        .collect()
}

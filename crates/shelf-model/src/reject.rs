use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw catalog record was dropped before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// Category classification needs a product name; blank counts as missing.
    #[error("missing product_name")]
    MissingProductName,
}

/// A per-record rejection: zero-based index into the deduplicated batch
/// plus the reason. Rejections are diagnostics, not run failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: RejectReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_renders_for_diagnostics() {
        let rejected = RejectedRecord {
            index: 3,
            reason: RejectReason::MissingProductName,
        };
        assert_eq!(rejected.reason.to_string(), "missing product_name");
    }
}

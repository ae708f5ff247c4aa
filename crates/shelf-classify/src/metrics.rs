use shelf_model::{AvailabilityStatus, SizeGroup};

/// Thresholds applied to the rounded availability percentage.
const SANCTION_BELOW: f64 = 0.30;
const WARNING_BELOW: f64 = 0.50;

/// Availability figures derived for one size record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityMetrics {
    pub total_offered_items: u32,
    pub available_items: u32,
    pub availability_percentage: f64,
    pub status: AvailabilityStatus,
    pub warning_sanction: Option<AvailabilityStatus>,
}

/// Derive the availability ratio and status codes.
///
/// The ratio is rounded to 2 decimals before the thresholds apply, so a
/// 3-of-10 record lands exactly on 0.30 and stays Warning. An empty offer
/// list cannot divide; it reads as fully unavailable (0.0, Sanction).
pub fn availability_metrics(
    total_offered_items: u32,
    available_items: u32,
    size_group: SizeGroup,
) -> AvailabilityMetrics {
    let (availability_percentage, status) = if total_offered_items == 0 {
        (0.0, AvailabilityStatus::Sanction)
    } else {
        let ratio = f64::from(available_items) / f64::from(total_offered_items);
        let rounded = (ratio * 100.0).round() / 100.0;
        (rounded, status_for(rounded))
    };
    // The Extra-Large override repeats the thresholds but is only kept for
    // that size group; every other group reads as empty downstream.
    let warning_sanction = (size_group == SizeGroup::ExtraLarge
        && status != AvailabilityStatus::Ok)
        .then_some(status);
    AvailabilityMetrics {
        total_offered_items,
        available_items,
        availability_percentage,
        status,
        warning_sanction,
    }
}

fn status_for(percentage: f64) -> AvailabilityStatus {
    if percentage < SANCTION_BELOW {
        AvailabilityStatus::Sanction
    } else if percentage < WARNING_BELOW {
        AvailabilityStatus::Warning
    } else {
        AvailabilityStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_lower_bound_is_inclusive() {
        let metrics = availability_metrics(10, 3, SizeGroup::Small);
        assert_eq!(metrics.availability_percentage, 0.30);
        assert_eq!(metrics.status, AvailabilityStatus::Warning);
    }

    #[test]
    fn thresholds_split_sanction_warning_ok() {
        assert_eq!(
            availability_metrics(10, 2, SizeGroup::Small).status,
            AvailabilityStatus::Sanction
        );
        assert_eq!(
            availability_metrics(10, 4, SizeGroup::Small).status,
            AvailabilityStatus::Warning
        );
        assert_eq!(
            availability_metrics(10, 5, SizeGroup::Small).status,
            AvailabilityStatus::Ok
        );
        assert_eq!(
            availability_metrics(4, 4, SizeGroup::Small).status,
            AvailabilityStatus::Ok
        );
    }

    #[test]
    fn rounding_happens_before_thresholds() {
        // 149/500 = 0.298 rounds to 0.30, which is Warning, not Sanction.
        let metrics = availability_metrics(500, 149, SizeGroup::Small);
        assert_eq!(metrics.availability_percentage, 0.30);
        assert_eq!(metrics.status, AvailabilityStatus::Warning);
    }

    #[test]
    fn override_only_kept_for_extra_large() {
        let extra = availability_metrics(10, 2, SizeGroup::ExtraLarge);
        assert_eq!(extra.warning_sanction, Some(AvailabilityStatus::Sanction));
        let extra_ok = availability_metrics(10, 9, SizeGroup::ExtraLarge);
        assert_eq!(extra_ok.warning_sanction, None);
        let small = availability_metrics(10, 2, SizeGroup::Small);
        assert_eq!(small.warning_sanction, None);
    }

    #[test]
    fn empty_offer_list_reads_fully_unavailable() {
        let metrics = availability_metrics(0, 0, SizeGroup::ExtraLarge);
        assert_eq!(metrics.availability_percentage, 0.0);
        assert_eq!(metrics.status, AvailabilityStatus::Sanction);
        assert_eq!(metrics.warning_sanction, Some(AvailabilityStatus::Sanction));
    }
}

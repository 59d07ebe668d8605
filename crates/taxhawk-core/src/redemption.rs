//! Plans how to split a planned long-term capital gains redemption across
//! the current and next financial year to make best use of the annual
//! LTCG exemption.

use crate::money::Money;
use crate::tax_math;
use serde::{Deserialize, Serialize};

/// Breakdown of a planned redemption split across two financial years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RedemptionPlan {
    /// Gain amount booked in the current financial year.
    pub booked_this_fy: Money,
    /// Gain amount deferred to the next financial year.
    pub deferred_to_next_fy: Money,
    /// Tax due if booked entirely this year.
    pub tax_if_booked_now: Money,
    /// Tax due under the recommended split.
    pub tax_under_split: Money,
    /// Savings from splitting rather than booking it all at once.
    pub savings: Money,
}

/// Computes the optimal split of `planned_ltcg` across the current and
/// next financial year, given how much of each year's exemption remains.
///
/// Splitting a redemption across two financial years lets each year's
/// ₹1,25,000 exemption apply separately, rather than one year's exemption
/// covering the whole gain while the rest is taxed at 12.5%.
pub fn compute_redemption_tax(
    planned_ltcg: Money,
    exemption_remaining_this_fy: Money,
    exemption_remaining_next_fy: Money,
) -> RedemptionPlan {
    let tax_if_booked_now = tax_on_ltcg_after_exemption(planned_ltcg, exemption_remaining_this_fy);

    let booked_this_fy = planned_ltcg.min(exemption_remaining_this_fy).non_negative();
    let deferred_to_next_fy = planned_ltcg.saturating_sub(booked_this_fy);

    let tax_this_fy = tax_on_ltcg_after_exemption(booked_this_fy, exemption_remaining_this_fy);
    let tax_next_fy = tax_on_ltcg_after_exemption(deferred_to_next_fy, exemption_remaining_next_fy);
    let tax_under_split = tax_this_fy + tax_next_fy;

    let savings = tax_if_booked_now.saturating_sub(tax_under_split);

    RedemptionPlan {
        booked_this_fy,
        deferred_to_next_fy,
        tax_if_booked_now,
        tax_under_split,
        savings,
    }
}

fn tax_on_ltcg_after_exemption(gain: Money, exemption_remaining: Money) -> Money {
    let taxable = gain.saturating_sub(exemption_remaining);
    taxable.multiply_rate(tax_math::effective_ltcg_rate()).round_to_rupee()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_gain_within_exemption_has_no_tax() {
        let plan = compute_redemption_tax(Money::from_rupees(100_000), Money::from_rupees(125_000), Money::from_rupees(125_000));
        assert_eq!(plan.tax_under_split, Money::ZERO);
    }

    #[test]
    fn test_splitting_across_years_saves_over_booking_all_now() {
        // 200,000 gain, only this FY's exemption of 125,000 remains, but
        // next FY's full 125,000 exemption is untouched.
        let plan = compute_redemption_tax(
            Money::from_rupees(200_000),
            Money::from_rupees(125_000),
            Money::from_rupees(125_000),
        );
        assert!(plan.savings.as_decimal() > rust_decimal::Decimal::ZERO);
        assert_eq!(plan.tax_under_split, Money::ZERO);
    }

    #[test]
    fn test_booked_plus_deferred_equals_planned() {
        let planned = Money::from_rupees(300_000);
        let plan = compute_redemption_tax(planned, Money::from_rupees(100_000), Money::from_rupees(125_000));
        assert_eq!(plan.booked_this_fy + plan.deferred_to_next_fy, planned);
    }
}

//! Pure arithmetic primitives: slab walking, rebate, surcharge, cess, HRA.
//!
//! Everything here is a free function over `Decimal`/`Money` — no I/O, no
//! access to `SalaryProfile` or `Holdings` beyond what's passed in.

use crate::money::Money;
use crate::traits::{SurchargeBracket, TaxBracket};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Section 80C combined cap (ELSS, PPF, EPF, life insurance, etc.).
pub const SECTION_80C_CAP: i64 = 150_000;

/// Section 80CCD(1B) additional NPS cap, on top of 80C.
pub const SECTION_80CCD_1B_CAP: i64 = 50_000;

/// Section 80D cap for self+family health insurance, below 60.
pub const SECTION_80D_SELF_CAP_BELOW_SIXTY: i64 = 25_000;

/// Section 80D cap for self+family health insurance, 60 or above.
pub const SECTION_80D_SELF_CAP_SENIOR: i64 = 50_000;

/// Section 80D cap for parents' health insurance, below 60.
pub const SECTION_80D_PARENTS_CAP_BELOW_SIXTY: i64 = 25_000;

/// Section 80D cap for parents' health insurance, 60 or above.
pub const SECTION_80D_PARENTS_CAP_SENIOR: i64 = 50_000;

/// Section 24(b) interest-on-housing-loan cap for a self-occupied property.
pub const SECTION_24B_SELF_OCCUPIED_CAP: i64 = 200_000;

/// Annual long-term capital gains exemption on listed equity/equity funds.
pub const LTCG_EXEMPTION: i64 = 125_000;

/// Flat health-and-education cess rate, applied on tax plus surcharge.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Long-term capital gains rate on listed equity/equity-oriented funds.
pub fn ltcg_rate() -> Decimal {
    dec!(0.125)
}

/// Short-term capital gains rate on listed equity/equity-oriented funds.
pub fn stcg_rate() -> Decimal {
    dec!(0.20)
}

/// Effective long-term capital gains rate with cess folded in (0.125 ×
/// 1.04 = 0.13). LTCG checks quote savings net of cess, not the bare slab
/// rate.
pub fn effective_ltcg_rate() -> Decimal {
    ltcg_rate() * (Decimal::ONE + CESS_RATE)
}

/// Walks an ascending slab table and returns the tax due on `taxable_income`.
///
/// Slabs are `(upper_limit, rate)` pairs; the running lower bound of each
/// slab is the previous slab's `upper_limit`, tracked here rather than
/// stored on the bracket itself. No rounding is applied; callers round only
/// at the final output boundary.
pub fn tax_on_slabs(taxable_income: Money, slabs: &[TaxBracket]) -> Money {
    let income = taxable_income.as_decimal().max(Decimal::ZERO);
    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for slab in slabs {
        let upper = slab
            .upper_limit
            .map(|u| u.as_decimal())
            .unwrap_or(Decimal::MAX);
        if income <= lower {
            break;
        }
        let slab_income = income.min(upper) - lower;
        if slab_income > Decimal::ZERO {
            tax += slab_income * slab.rate;
        }
        lower = upper;
    }

    Money::new(tax)
}

/// Returns the marginal rate applicable at `taxable_income` under `slabs`.
pub fn marginal_rate(taxable_income: Money, slabs: &[TaxBracket]) -> Decimal {
    let income = taxable_income.as_decimal().max(Decimal::ZERO);
    for slab in slabs {
        let upper = slab
            .upper_limit
            .map(|u| u.as_decimal())
            .unwrap_or(Decimal::MAX);
        if income <= upper {
            return slab.rate;
        }
    }
    slabs.last().map(|s| s.rate).unwrap_or(Decimal::ZERO)
}

/// Marginal rate with cess folded in, for quoting what a deduction is
/// actually worth in take-home terms rather than the bare slab rate.
pub fn marginal_rate_with_cess(taxable_income: Money, slabs: &[TaxBracket]) -> Decimal {
    marginal_rate(taxable_income, slabs) * (Decimal::ONE + CESS_RATE)
}

/// Applies the Section 87A rebate cliff: if `taxable_income` is at or below
/// `ceiling`, the smaller of `tax` and `max_rebate` is subtracted; above it,
/// nothing changes. A rupee over the ceiling can therefore cost far more
/// than a rupee of tax.
pub fn apply_87a_rebate(tax: Money, taxable_income: Money, ceiling: Money, max_rebate: Money) -> Money {
    if taxable_income.as_decimal() <= ceiling.as_decimal() {
        tax.saturating_sub(tax.min(max_rebate))
    } else {
        tax
    }
}

/// Applies the 4% health-and-education cess on `amount` (tax plus
/// surcharge), rounded half-away-from-zero to the nearest rupee.
pub fn apply_cess(amount: Money) -> Money {
    amount.multiply_rate(CESS_RATE).round_to_rupee()
}

/// Computes surcharge with marginal relief.
///
/// The raw surcharge is `base_tax * slab_rate` for the slab `taxable_income`
/// falls into. Marginal relief caps the *increase* in tax-plus-surcharge
/// that crossing into a higher surcharge slab can cause: the combined
/// increase must never exceed the excess of income over the slab's lower
/// threshold. This mirrors the "compute raw, compute a cap, take the
/// minimum" shape used for solidarity-surcharge relief on German income tax,
/// generalized here to a slab table instead of a single threshold.
pub fn surcharge(
    taxable_income: Money,
    base_tax: Money,
    surcharge_slabs: &[SurchargeBracket],
    income_tax_slabs: &[TaxBracket],
) -> Money {
    let income = taxable_income.as_decimal().max(Decimal::ZERO);
    let tax = base_tax.as_decimal().max(Decimal::ZERO);

    let mut lower_threshold = Decimal::ZERO;
    let mut rate = Decimal::ZERO;
    for slab in surcharge_slabs {
        let upper = slab
            .upper_limit
            .map(|u| u.as_decimal())
            .unwrap_or(Decimal::MAX);
        if income <= upper {
            rate = slab.rate;
            break;
        }
        lower_threshold = upper;
    }

    if rate.is_zero() {
        return Money::ZERO;
    }

    let raw_surcharge = tax * rate;

    if lower_threshold.is_zero() {
        return Money::new(raw_surcharge);
    }

    // Relief applies only when this slab's rate is actually higher than the
    // rate that applied just below the threshold; find that prior rate.
    let prior_rate = surcharge_slabs
        .iter()
        .take_while(|s| {
            let upper = s.upper_limit.map(|u| u.as_decimal()).unwrap_or(Decimal::MAX);
            upper <= lower_threshold
        })
        .last()
        .map(|s| s.rate)
        .unwrap_or(Decimal::ZERO);

    let tax_at_threshold = tax_on_slabs(Money::new(lower_threshold), income_tax_slabs).as_decimal();
    let tax_plus_surcharge_at_threshold = tax_at_threshold + tax_at_threshold * prior_rate;
    let excess_income = income - lower_threshold;
    let relief_cap = tax + raw_surcharge - tax_plus_surcharge_at_threshold;

    if relief_cap > excess_income {
        let capped_total_increase = excess_income;
        let capped_surcharge = tax_plus_surcharge_at_threshold + capped_total_increase - tax;
        Money::new(capped_surcharge.max(Decimal::ZERO))
    } else {
        Money::new(raw_surcharge)
    }
}

/// Computes the HRA exemption under Section 10(13A): the minimum of the
/// three statutory components.
///
/// 1. HRA actually received.
/// 2. Rent paid minus 10% of basic salary.
/// 3. 50% of basic salary in a metro city, else 40%.
pub fn hra_exemption(basic: Money, hra_received: Money, rent_paid_annual: Money, is_metro: bool) -> Money {
    let component_1 = hra_received;
    let component_2 = rent_paid_annual.saturating_sub(basic.multiply_rate(dec!(0.10)));
    let city_rate = if is_metro { dec!(0.50) } else { dec!(0.40) };
    let component_3 = basic.multiply_rate(city_rate);

    component_1.min(component_2).min(component_3).non_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_slabs() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(300_000)) },
            TaxBracket { rate: dec!(0.05), upper_limit: Some(Money::from_rupees(700_000)) },
            TaxBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.15), upper_limit: Some(Money::from_rupees(1_200_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_500_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    #[test]
    fn test_tax_on_slabs_zero_below_exemption() {
        let slabs = sample_new_slabs();
        assert_eq!(tax_on_slabs(Money::from_rupees(250_000), &slabs), Money::ZERO);
    }

    #[test]
    fn test_tax_on_slabs_single_bracket() {
        let slabs = sample_new_slabs();
        // 500,000 taxable: 300,000 @ 0% + 200,000 @ 5% = 10,000.
        assert_eq!(tax_on_slabs(Money::from_rupees(500_000), &slabs), Money::from_rupees(10_000));
    }

    #[test]
    fn test_tax_on_slabs_monotonic() {
        let slabs = sample_new_slabs();
        let lower = tax_on_slabs(Money::from_rupees(800_000), &slabs);
        let higher = tax_on_slabs(Money::from_rupees(900_000), &slabs);
        assert!(higher.as_decimal() >= lower.as_decimal());
    }

    #[test]
    fn test_tax_on_slabs_top_bracket_unbounded() {
        let slabs = sample_new_slabs();
        let tax = tax_on_slabs(Money::from_rupees(2_000_000), &slabs);
        assert!(tax.as_decimal() > Decimal::ZERO);
    }

    #[test]
    fn test_87a_rebate_cliff() {
        let ceiling = Money::from_rupees(700_000);
        let max_rebate = Money::from_rupees(25_000);
        let just_below = apply_87a_rebate(Money::from_rupees(20_000), Money::from_rupees(700_000), ceiling, max_rebate);
        assert_eq!(just_below, Money::ZERO);

        let just_above = apply_87a_rebate(Money::from_rupees(20_000), Money::from_rupees(700_001), ceiling, max_rebate);
        assert_eq!(just_above, Money::from_rupees(20_000));
    }

    #[test]
    fn test_87a_rebate_caps_at_max() {
        let ceiling = Money::from_rupees(700_000);
        let max_rebate = Money::from_rupees(25_000);
        let rebated = apply_87a_rebate(Money::from_rupees(30_000), Money::from_rupees(700_000), ceiling, max_rebate);
        assert_eq!(rebated, Money::from_rupees(5_000));
    }

    #[test]
    fn test_cess_is_four_percent() {
        assert_eq!(apply_cess(Money::from_rupees(100_000)), Money::from_rupees(4_000));
    }

    #[test]
    fn test_hra_exemption_takes_minimum() {
        // Basic 50,000/mo, HRA 30,000/mo, rent 40,000/mo, non-metro.
        let basic = Money::from_rupees(600_000);
        let hra_received = Money::from_rupees(360_000);
        let rent_paid = Money::from_rupees(480_000);
        let exemption = hra_exemption(basic, hra_received, rent_paid, false);
        // component_2 = 480,000 - 60,000 = 420,000; component_3 = 240,000 (40%).
        // component_1 = 360,000. Minimum is component_3 = 240,000.
        assert_eq!(exemption, Money::from_rupees(240_000));
    }

    #[test]
    fn test_hra_exemption_never_negative() {
        let basic = Money::from_rupees(600_000);
        let hra_received = Money::from_rupees(100_000);
        let rent_paid = Money::ZERO;
        let exemption = hra_exemption(basic, hra_received, rent_paid, true);
        assert_eq!(exemption, Money::ZERO);
    }

    fn sample_old_slabs() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(250_000)) },
            TaxBracket { rate: dec!(0.05), upper_limit: Some(Money::from_rupees(500_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    #[test]
    fn test_surcharge_zero_below_threshold() {
        let slabs = vec![
            SurchargeBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(5_000_000)) },
            SurchargeBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(10_000_000)) },
            SurchargeBracket { rate: dec!(0.37), upper_limit: None },
        ];
        let income_tax_slabs = sample_old_slabs();
        let s = surcharge(Money::from_rupees(4_000_000), Money::from_rupees(1_000_000), &slabs, &income_tax_slabs);
        assert_eq!(s, Money::ZERO);
    }

    #[test]
    fn test_surcharge_marginal_relief_applies_near_threshold() {
        // scenario S5: income just over ₹50L should get marginal relief so the
        // post-surcharge increase never exceeds the income increase.
        let slabs = vec![
            SurchargeBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(5_000_000)) },
            SurchargeBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(10_000_000)) },
            SurchargeBracket { rate: dec!(0.37), upper_limit: None },
        ];
        let income_tax_slabs = sample_old_slabs();

        let income_at = Money::from_rupees(5_000_000);
        let income_above = Money::from_rupees(5_100_000);
        let tax_at = tax_on_slabs(income_at, &income_tax_slabs);
        let tax_above = tax_on_slabs(income_above, &income_tax_slabs);

        let s_at = surcharge(income_at, tax_at, &slabs, &income_tax_slabs);
        let s_above = surcharge(income_above, tax_above, &slabs, &income_tax_slabs);

        let total_at = tax_at + s_at;
        let total_above = tax_above + s_above;
        // The increase in total liability must not exceed the increase in income.
        assert!((total_above.as_decimal() - total_at.as_decimal()) <= dec!(100_000));
    }

    #[test]
    fn test_surcharge_cap_uncapped_old_regime_above_5cr() {
        let slabs = vec![
            SurchargeBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(5_000_000)) },
            SurchargeBracket { rate: dec!(0.37), upper_limit: None },
        ];
        let income_tax_slabs = sample_old_slabs();
        let s = surcharge(
            Money::from_rupees(70_000_000),
            Money::from_rupees(20_000_000),
            &slabs,
            &income_tax_slabs,
        );
        assert!(s.as_decimal() > Decimal::ZERO);
    }
}

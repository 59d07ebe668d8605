//! Trait for financial-year-specific statutory tax rules.

use crate::money::Money;
use crate::types::{AgeCategory, FinancialYear};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single progressive tax slab: an ordered `(upper_limit, rate)` pair,
/// where the last entry in a table has `upper_limit = None` standing in
/// for +∞.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Tax rate as a decimal (e.g., 0.10 for 10%).
    pub rate: Decimal,
    /// Upper limit of this slab; `None` stands in for +∞ (only valid on the
    /// last slab in a table).
    pub upper_limit: Option<Money>,
}

/// A single surcharge slab, keyed the same way as `TaxBracket` but over
/// taxable income rather than marginal tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurchargeBracket {
    /// Surcharge rate as a decimal (e.g., 0.10 for 10%).
    pub rate: Decimal,
    /// Upper limit of taxable income for this slab; `None` for +∞.
    pub upper_limit: Option<Money>,
}

/// The Section 87A rebate rule for one (financial year, regime) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RebateRule {
    /// Taxable-income ceiling up to and including which the rebate applies.
    pub ceiling: Money,
    /// Maximum rebate amount.
    pub max_rebate: Money,
}

/// Trait providing the statutory constants for one financial year.
///
/// Implementations provide finite, immutable tables — slabs, standard
/// deduction, and Section 87A rebate, all keyed by financial year. Deduction
/// caps that do not vary by year (80C, 80D, 24b, LTCG) live as free
/// constants in `tax_math`, not on this trait.
pub trait TaxYearRules: Send + Sync {
    /// Returns the financial year these rules apply to.
    fn financial_year(&self) -> FinancialYear;

    /// New-regime tax slabs, in ascending order.
    fn new_regime_slabs(&self) -> &[TaxBracket];

    /// Old-regime tax slabs for the given age category, in ascending order.
    fn old_regime_slabs(&self, age: AgeCategory) -> &[TaxBracket];

    /// Surcharge slabs applied on new-regime tax (capped at 25%).
    fn surcharge_slabs_new(&self) -> &[SurchargeBracket];

    /// Surcharge slabs applied on old-regime tax (uncapped, up to 37%).
    fn surcharge_slabs_old(&self) -> &[SurchargeBracket];

    /// Standard deduction under the new regime.
    fn standard_deduction_new(&self) -> Money;

    /// Standard deduction under the old regime.
    fn standard_deduction_old(&self) -> Money;

    /// Section 87A rebate rule for the new regime.
    fn rebate_new(&self) -> RebateRule;

    /// Section 87A rebate rule for the old regime.
    fn rebate_old(&self) -> RebateRule;
}

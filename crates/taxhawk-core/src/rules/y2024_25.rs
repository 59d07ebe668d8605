//! Statutory tax rules for financial year 2024-25.

use crate::money::Money;
use crate::traits::{RebateRule, SurchargeBracket, TaxBracket, TaxYearRules};
use crate::types::{AgeCategory, FinancialYear};
use rust_decimal_macros::dec;

/// Tax rules for FY 2024-25.
#[derive(Debug, Clone)]
pub struct Rules2024_25 {
    new_slabs: Vec<TaxBracket>,
    old_slabs_below_sixty: Vec<TaxBracket>,
    old_slabs_senior: Vec<TaxBracket>,
    old_slabs_super_senior: Vec<TaxBracket>,
    surcharge_new: Vec<SurchargeBracket>,
    surcharge_old: Vec<SurchargeBracket>,
}

impl Default for Rules2024_25 {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules2024_25 {
    /// Creates a new `Rules2024_25` instance with all FY 2024-25 parameters.
    pub fn new() -> Self {
        Self {
            new_slabs: Self::build_new_slabs(),
            old_slabs_below_sixty: Self::build_old_slabs_below_sixty(),
            old_slabs_senior: Self::build_old_slabs_senior(),
            old_slabs_super_senior: Self::build_old_slabs_super_senior(),
            surcharge_new: Self::build_surcharge_new(),
            surcharge_old: Self::build_surcharge_old(),
        }
    }

    fn build_new_slabs() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(300_000)) },
            TaxBracket { rate: dec!(0.05), upper_limit: Some(Money::from_rupees(700_000)) },
            TaxBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.15), upper_limit: Some(Money::from_rupees(1_200_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_500_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    fn build_old_slabs_below_sixty() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(250_000)) },
            TaxBracket { rate: dec!(0.05), upper_limit: Some(Money::from_rupees(500_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    fn build_old_slabs_senior() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(300_000)) },
            TaxBracket { rate: dec!(0.05), upper_limit: Some(Money::from_rupees(500_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    fn build_old_slabs_super_senior() -> Vec<TaxBracket> {
        vec![
            TaxBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(500_000)) },
            TaxBracket { rate: dec!(0.20), upper_limit: Some(Money::from_rupees(1_000_000)) },
            TaxBracket { rate: dec!(0.30), upper_limit: None },
        ]
    }

    fn build_surcharge_new() -> Vec<SurchargeBracket> {
        vec![
            SurchargeBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(5_000_000)) },
            SurchargeBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(10_000_000)) },
            SurchargeBracket { rate: dec!(0.15), upper_limit: Some(Money::from_rupees(20_000_000)) },
            SurchargeBracket { rate: dec!(0.25), upper_limit: Some(Money::from_rupees(50_000_000)) },
            // New regime surcharge is capped at 25%, even above ₹5 crore.
            SurchargeBracket { rate: dec!(0.25), upper_limit: None },
        ]
    }

    fn build_surcharge_old() -> Vec<SurchargeBracket> {
        vec![
            SurchargeBracket { rate: dec!(0.00), upper_limit: Some(Money::from_rupees(5_000_000)) },
            SurchargeBracket { rate: dec!(0.10), upper_limit: Some(Money::from_rupees(10_000_000)) },
            SurchargeBracket { rate: dec!(0.15), upper_limit: Some(Money::from_rupees(20_000_000)) },
            SurchargeBracket { rate: dec!(0.25), upper_limit: Some(Money::from_rupees(50_000_000)) },
            SurchargeBracket { rate: dec!(0.37), upper_limit: None },
        ]
    }
}

impl TaxYearRules for Rules2024_25 {
    fn financial_year(&self) -> FinancialYear {
        FinancialYear::Fy2024_25
    }

    fn new_regime_slabs(&self) -> &[TaxBracket] {
        &self.new_slabs
    }

    fn old_regime_slabs(&self, age: AgeCategory) -> &[TaxBracket] {
        match age {
            AgeCategory::BelowSixty => &self.old_slabs_below_sixty,
            AgeCategory::Senior => &self.old_slabs_senior,
            AgeCategory::SuperSenior => &self.old_slabs_super_senior,
        }
    }

    fn surcharge_slabs_new(&self) -> &[SurchargeBracket] {
        &self.surcharge_new
    }

    fn surcharge_slabs_old(&self) -> &[SurchargeBracket] {
        &self.surcharge_old
    }

    fn standard_deduction_new(&self) -> Money {
        Money::from_rupees(75_000)
    }

    fn standard_deduction_old(&self) -> Money {
        Money::from_rupees(50_000)
    }

    fn rebate_new(&self) -> RebateRule {
        RebateRule {
            ceiling: Money::from_rupees(700_000),
            max_rebate: Money::from_rupees(25_000),
        }
    }

    fn rebate_old(&self) -> RebateRule {
        RebateRule {
            ceiling: Money::from_rupees(500_000),
            max_rebate: Money::from_rupees(12_500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deductions() {
        let rules = Rules2024_25::new();
        assert_eq!(rules.standard_deduction_new(), Money::from_rupees(75_000));
        assert_eq!(rules.standard_deduction_old(), Money::from_rupees(50_000));
    }

    #[test]
    fn test_rebate_ceilings() {
        let rules = Rules2024_25::new();
        assert_eq!(rules.rebate_new().ceiling, Money::from_rupees(700_000));
        assert_eq!(rules.rebate_old().ceiling, Money::from_rupees(500_000));
    }

    #[test]
    fn test_old_slabs_vary_by_age() {
        let rules = Rules2024_25::new();
        assert_eq!(rules.old_regime_slabs(AgeCategory::BelowSixty)[0].upper_limit, Some(Money::from_rupees(250_000)));
        assert_eq!(rules.old_regime_slabs(AgeCategory::Senior)[0].upper_limit, Some(Money::from_rupees(300_000)));
        assert_eq!(rules.old_regime_slabs(AgeCategory::SuperSenior)[0].upper_limit, Some(Money::from_rupees(500_000)));
    }

    #[test]
    fn test_new_regime_surcharge_capped_at_25_percent() {
        let rules = Rules2024_25::new();
        let last = rules.surcharge_slabs_new().last().unwrap();
        assert_eq!(last.rate, dec!(0.25));
    }

    #[test]
    fn test_old_regime_surcharge_uncapped() {
        let rules = Rules2024_25::new();
        let last = rules.surcharge_slabs_old().last().unwrap();
        assert_eq!(last.rate, dec!(0.37));
    }
}

//! Tax rules loader — resolves a `FinancialYear` to its statutory rules.

use crate::rules::{Rules2024_25, Rules2025_26};
use crate::traits::TaxYearRules;
use crate::types::FinancialYear;
use std::sync::Arc;

/// Loader for tax rules by financial year.
///
/// `FinancialYear` is a closed, finite enum, so unlike a year-number-keyed
/// lookup this resolution can never fail: every variant has a
/// corresponding rules table.
#[derive(Debug, Default)]
pub struct RulesLoader {}

impl RulesLoader {
    /// Creates a new rules loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tax rules for the given financial year.
    pub fn load(&self, fy: FinancialYear) -> Arc<dyn TaxYearRules> {
        match fy {
            FinancialYear::Fy2024_25 => Arc::new(Rules2024_25::new()),
            FinancialYear::Fy2025_26 => Arc::new(Rules2025_26::new()),
        }
    }

    /// Returns every financial year this loader can resolve.
    pub fn supported_years(&self) -> &'static [FinancialYear] {
        &[FinancialYear::Fy2024_25, FinancialYear::Fy2025_26]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_both_years() {
        let loader = RulesLoader::new();
        assert_eq!(loader.load(FinancialYear::Fy2024_25).financial_year(), FinancialYear::Fy2024_25);
        assert_eq!(loader.load(FinancialYear::Fy2025_26).financial_year(), FinancialYear::Fy2025_26);
    }

    #[test]
    fn test_supported_years() {
        let loader = RulesLoader::new();
        assert_eq!(loader.supported_years().len(), 2);
    }
}

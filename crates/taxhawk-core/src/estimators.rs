//! Thin mappers that build rough inputs from coarser figures a user might
//! actually have on hand, rather than the precise component breakdown
//! `SalaryProfile`/`Holdings` expect.
//!
//! These are explicitly approximations — every figure they produce is an
//! estimate, not a statement of fact, and a caller with exact numbers
//! should always build `SalaryProfile`/`Holdings` directly instead.

use crate::holdings::{Holding, Holdings, SecurityType};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::types::{City, FinancialYear, Regime};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Typical component split observed for salaried individuals, used only
/// when a caller has nothing more than a CTC figure to work from.
const ESTIMATED_BASIC_FRACTION: Decimal = dec!(0.40);
const ESTIMATED_HRA_FRACTION: Decimal = dec!(0.20);

/// Builds a rough `SalaryProfile` from an annual CTC figure and a handful
/// of commonly-known facts, splitting CTC into basic/HRA/other using a
/// typical salaried-compensation structure.
///
/// This is a starting point for a "what if" estimate, not a substitute for
/// an actual payslip breakdown.
pub fn estimate_salary_profile_from_ctc(
    ctc: Money,
    financial_year: FinancialYear,
    city: City,
    current_regime: Regime,
    monthly_rent: Money,
) -> SalaryProfile {
    let basic_salary = ctc.multiply_rate(ESTIMATED_BASIC_FRACTION);
    let hra_received = ctc.multiply_rate(ESTIMATED_HRA_FRACTION);
    let other_salary = ctc.saturating_sub(basic_salary).saturating_sub(hra_received);

    SalaryProfile {
        financial_year,
        city,
        current_regime,
        basic_salary,
        hra_received,
        other_salary,
        annual_rent_paid: monthly_rent.multiply_rate(Decimal::from(12)),
        monthly_rent,
        professional_tax: Money::ZERO,
        deduction_80ccd_2: Money::ZERO,
        epf_employee_contribution: Money::ZERO,
        section_80c_investments: Money::ZERO,
        nps_contribution_80ccd_1b: Money::ZERO,
        section_80d_self: Money::ZERO,
        section_80d_parents: Money::ZERO,
        home_loan_interest: Money::ZERO,
        declared_taxable_income: None,
    }
}

/// Builds a single estimated `Holding` from a total invested amount, an
/// assumed purchase date, and a gain/loss percentage — used when a caller
/// only has a portfolio value range rather than individual lot details.
pub fn estimate_holdings_from_range(
    invested_amount: Money,
    purchase_date: NaiveDate,
    estimated_gain_percent: Decimal,
    security_type: SecurityType,
) -> Holdings {
    let purchase_price = dec!(100);
    let quantity = invested_amount.as_decimal() / purchase_price;
    let current_price = purchase_price * (Decimal::ONE + estimated_gain_percent / dec!(100));

    let holding = Holding {
        security_name: "Estimated holding".to_string(),
        security_type,
        purchase_date,
        purchase_price,
        quantity,
        current_price,
    };

    Holdings {
        lots: vec![holding],
        realized_stcg_this_fy: Money::ZERO,
        realized_ltcg_this_fy: Money::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctc_split_sums_back_to_ctc() {
        let ctc = Money::from_rupees(1_200_000);
        let profile = estimate_salary_profile_from_ctc(
            ctc,
            FinancialYear::Fy2024_25,
            City::new("Mumbai"),
            Regime::Old,
            Money::from_rupees(25_000),
        );
        assert_eq!(profile.gross_salary(), ctc);
    }

    #[test]
    fn test_estimated_holding_reflects_gain_percent() {
        let holdings = estimate_holdings_from_range(
            Money::from_rupees(100_000),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            dec!(50),
            SecurityType::EquityMutualFund,
        );
        let lot = &holdings.lots[0];
        assert!(lot.current_value().as_decimal() > lot.total_cost().as_decimal());
    }
}

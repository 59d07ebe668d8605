//! Checks whether the taxpayer is claiming the full HRA exemption they are
//! entitled to.
//!
//! Always computed on the old-regime basis; the orchestrator decides
//! whether to surface this check based on the recommended regime. This is
//! a display-only check — it reports the entitled exemption and what it is
//! worth, but does not itself carry a `savings` figure, since the profile
//! has no separate "claimed" exemption to compare against.
use crate::finding::{CheckId, Finding};
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus};

/// Runs the HRA-optimizer check.
pub fn run(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> Finding {
    if profile.hra_received.is_zero() || profile.annual_rent_paid.is_zero() {
        return Finding::not_applicable(
            CheckId::HraOptimizer,
            "HRA exemption",
            "No HRA received or no rent paid declared",
        );
    }

    let entitled_exemption = tax_math::hra_exemption(
        profile.basic_salary,
        profile.hra_received,
        profile.annual_rent_paid,
        profile.is_metro(),
    );

    // The profile model does not separately track a "claimed" exemption
    // figure distinct from the computed one, so the check verifies the
    // entitled exemption is being reflected in old-regime taxable income
    // rather than comparing against a user-declared claim. old_regime_taxable_income
    // already has this exemption subtracted out, so the marginal rate it's
    // worth is evaluated one step before that subtraction.
    let taxable_income_before_exemption = crate::regime::old_regime_taxable_income(profile, rules) + entitled_exemption;
    let marginal_rate = tax_math::marginal_rate_with_cess(taxable_income_before_exemption, rules.old_regime_slabs(age));

    if entitled_exemption.is_zero() {
        return Finding {
            check_id: CheckId::HraOptimizer,
            check_name: "HRA exemption".to_string(),
            status: FindingStatus::NotApplicable,
            finding: "No HRA exemption available given current rent and basic salary".to_string(),
            savings: crate::money::Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: "Rent paid does not exceed 10% of basic salary, so no exemption applies.".to_string(),
            details: serde_json::json!({"entitled_exemption": 0}),
        };
    }

    let potential_savings = entitled_exemption.multiply_rate(marginal_rate).round_to_rupee();

    Finding {
        check_id: CheckId::HraOptimizer,
        check_name: "HRA exemption".to_string(),
        status: FindingStatus::Opportunity,
        finding: format!("Entitled to an HRA exemption of {}", entitled_exemption),
        savings: crate::money::Money::ZERO,
        action: Some("Ensure rent receipts and, for rent above ₹1,00,000/year, landlord PAN are submitted to claim the full HRA exemption".to_string()),
        deadline: Some("Before the employer's investment-declaration deadline".to_string()),
        confidence: Confidence::Likely,
        explanation: format!(
            "The minimum of HRA received, rent paid minus 10% of basic, and {}% of basic salary is {}, worth {} at the marginal rate.",
            if profile.is_metro() { 50 } else { 40 },
            entitled_exemption,
            potential_savings
        ),
        details: serde_json::json!({
            "entitled_exemption": entitled_exemption.as_rupees(),
            "potential_savings": potential_savings.as_rupees(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::rules::Rules2024_25;
    use crate::types::{City, FinancialYear, Regime};

    fn profile() -> SalaryProfile {
        SalaryProfile {
            financial_year: FinancialYear::Fy2024_25,
            city: City::new("Mumbai"),
            current_regime: Regime::Old,
            basic_salary: Money::from_rupees(600_000),
            hra_received: Money::from_rupees(300_000),
            other_salary: Money::from_rupees(400_000),
            annual_rent_paid: Money::from_rupees(360_000),
            monthly_rent: Money::from_rupees(30_000),
            professional_tax: Money::ZERO,
            deduction_80ccd_2: Money::ZERO,
            epf_employee_contribution: Money::from_rupees(72_000),
            section_80c_investments: Money::from_rupees(50_000),
            nps_contribution_80ccd_1b: Money::ZERO,
            section_80d_self: Money::from_rupees(20_000),
            section_80d_parents: Money::ZERO,
            home_loan_interest: Money::ZERO,
            declared_taxable_income: None,
        }
    }

    #[test]
    fn test_not_applicable_with_no_rent() {
        let mut profile = profile();
        profile.annual_rent_paid = Money::ZERO;
        let rules = Rules2024_25::new();
        let finding = run(&profile, AgeCategory::BelowSixty, &rules);
        assert_eq!(finding.status, FindingStatus::NotApplicable);
    }

    #[test]
    fn test_opportunity_when_exemption_available() {
        let profile = profile();
        let rules = Rules2024_25::new();
        let finding = run(&profile, AgeCategory::BelowSixty, &rules);
        assert_eq!(finding.status, FindingStatus::Opportunity);
        assert_eq!(finding.savings, Money::ZERO);
        assert!(finding.details["potential_savings"].as_i64().unwrap() > 0);
    }
}

//! Flags unused headroom under the combined Section 80C cap.
//!
//! Always computed on the old-regime basis, since the new regime does not
//! honor Section 80C at all; the orchestrator decides whether to surface
//! this check based on the recommended regime, not this function.

use crate::finding::{CheckId, Finding};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus};

/// Runs the 80C-gap check.
pub fn run(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> Finding {
    let cap = Money::from_rupees(tax_math::SECTION_80C_CAP);
    let current_80c_total = profile.section_80c_investments.min(cap);
    let gap = cap.saturating_sub(current_80c_total);

    if gap.is_zero() {
        return Finding {
            check_id: CheckId::Section80cGap,
            check_name: "Section 80C headroom".to_string(),
            status: FindingStatus::Optimized,
            finding: "Section 80C is fully utilized".to_string(),
            savings: Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: format!("{} of the {} cap is already used.", current_80c_total, cap),
            details: serde_json::json!({
                "current_80c_total": current_80c_total.as_rupees(),
                "epf_contribution": profile.epf_employee_contribution.as_rupees(),
                "cap": cap.as_rupees(),
            }),
        };
    }

    let marginal_rate = marginal_rate_old_regime(profile, age, rules);
    let savings = gap.multiply_rate(marginal_rate).round_to_rupee();

    Finding {
        check_id: CheckId::Section80cGap,
        check_name: "Section 80C headroom".to_string(),
        status: FindingStatus::Opportunity,
        finding: format!("{} of unused Section 80C headroom", gap),
        savings,
        action: Some(format!(
            "Invest an additional {} in ELSS, PPF, or life insurance before the end of the financial year",
            gap
        )),
        deadline: Some("31 March of this financial year".to_string()),
        confidence: Confidence::Likely,
        explanation: format!(
            "At a marginal rate of {}%, investing the remaining {} headroom saves {} in tax.",
            marginal_rate * rust_decimal::Decimal::from(100),
            gap,
            savings
        ),
        details: serde_json::json!({
            "current_80c_total": current_80c_total.as_rupees(),
            "epf_contribution": profile.epf_employee_contribution.as_rupees(),
            "cap": cap.as_rupees(),
            "gap": gap.as_rupees(),
        }),
    }
}

fn marginal_rate_old_regime(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> rust_decimal::Decimal {
    let taxable_income = crate::regime::old_regime_taxable_income(profile, rules);
    tax_math::marginal_rate_with_cess(taxable_income, rules.old_regime_slabs(age))
}

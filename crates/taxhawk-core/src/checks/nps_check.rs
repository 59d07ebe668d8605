//! Flags unused headroom under the additional Section 80CCD(1B) NPS
//! deduction.
//!
//! Always computed on the old-regime basis; the orchestrator decides
//! whether to surface this check based on the recommended regime.

use crate::finding::{CheckId, Finding};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus};

/// Runs the NPS-headroom check.
pub fn run(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> Finding {
    let cap = Money::from_rupees(tax_math::SECTION_80CCD_1B_CAP);
    let used = profile.nps_contribution_80ccd_1b.min(cap);
    let gap = cap.saturating_sub(used);

    if gap.is_zero() {
        return Finding {
            check_id: CheckId::NpsCheck,
            check_name: "NPS additional deduction".to_string(),
            status: FindingStatus::Optimized,
            finding: "Section 80CCD(1B) is fully utilized".to_string(),
            savings: Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: format!("{} of the {} cap is already used.", used, cap),
            details: serde_json::json!({"used": used.as_rupees(), "cap": cap.as_rupees()}),
        };
    }

    let taxable_income = crate::regime::old_regime_taxable_income(profile, rules);
    let marginal_rate = tax_math::marginal_rate_with_cess(taxable_income, rules.old_regime_slabs(age));
    let savings = gap.multiply_rate(marginal_rate).round_to_rupee();

    Finding {
        check_id: CheckId::NpsCheck,
        check_name: "NPS additional deduction".to_string(),
        status: FindingStatus::Opportunity,
        finding: format!("{} of unused Section 80CCD(1B) headroom", gap),
        savings,
        action: Some(format!("Contribute an additional {} to NPS under Section 80CCD(1B)", gap)),
        deadline: Some("31 March of this financial year".to_string()),
        confidence: Confidence::Likely,
        explanation: format!(
            "This deduction is independent of the Section 80C cap; at a marginal rate of {}% it saves {}.",
            marginal_rate * rust_decimal::Decimal::from(100),
            savings
        ),
        details: serde_json::json!({"used": used.as_rupees(), "cap": cap.as_rupees(), "gap": gap.as_rupees()}),
    }
}

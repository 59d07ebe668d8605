//! Flags unused headroom under Section 80D health insurance premium limits.
//!
//! Always computed on the old-regime basis; the orchestrator decides
//! whether to surface this check based on the recommended regime.

use crate::finding::{CheckId, Finding};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus, Options};

/// Runs the 80D-gap check.
pub fn run(profile: &SalaryProfile, age: AgeCategory, options: &Options, rules: &dyn TaxYearRules) -> Finding {
    let self_cap = Money::from_rupees(if matches!(age, AgeCategory::Senior | AgeCategory::SuperSenior) {
        tax_math::SECTION_80D_SELF_CAP_SENIOR
    } else {
        tax_math::SECTION_80D_SELF_CAP_BELOW_SIXTY
    });
    let parents_cap = Money::from_rupees(if options.parents_senior {
        tax_math::SECTION_80D_PARENTS_CAP_SENIOR
    } else {
        tax_math::SECTION_80D_PARENTS_CAP_BELOW_SIXTY
    });

    let self_used = profile.section_80d_self.min(self_cap);
    let parents_used = profile.section_80d_parents.min(parents_cap);
    let self_gap = self_cap.saturating_sub(self_used);
    let parents_gap = parents_cap.saturating_sub(parents_used);
    let total_gap = self_gap + parents_gap;

    if total_gap.is_zero() {
        return Finding {
            check_id: CheckId::Section80dCheck,
            check_name: "Section 80D headroom".to_string(),
            status: FindingStatus::Optimized,
            finding: "Section 80D limits are fully utilized".to_string(),
            savings: Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: "Self and parent premium deductions are both at their statutory caps.".to_string(),
            details: serde_json::json!({"self_gap": 0, "parents_gap": 0}),
        };
    }

    let taxable_income = crate::regime::old_regime_taxable_income(profile, rules);
    let marginal_rate = tax_math::marginal_rate_with_cess(taxable_income, rules.old_regime_slabs(age));
    let savings = total_gap.multiply_rate(marginal_rate).round_to_rupee();

    Finding {
        check_id: CheckId::Section80dCheck,
        check_name: "Section 80D headroom".to_string(),
        status: FindingStatus::Opportunity,
        finding: format!("{} of unused Section 80D headroom", total_gap),
        savings,
        action: Some("Increase health insurance premium for self, family, or parents to use the remaining limit".to_string()),
        deadline: Some("31 March of this financial year".to_string()),
        confidence: Confidence::Likely,
        explanation: format!(
            "Self headroom is {} and parent headroom is {}; at a marginal rate of {}% this saves {}.",
            self_gap,
            parents_gap,
            marginal_rate * rust_decimal::Decimal::from(100),
            savings
        ),
        details: serde_json::json!({
            "self_gap": self_gap.as_rupees(),
            "parents_gap": parents_gap.as_rupees(),
        }),
    }
}

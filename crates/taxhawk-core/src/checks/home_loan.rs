//! Surfaces the tax value of the Section 24(b) self-occupied home-loan
//! interest deduction.
//!
//! Always computed on the old-regime basis; the orchestrator decides
//! whether to surface this check based on the recommended regime. This is
//! a display-only check — it reports what the capped deduction is worth,
//! but does not itself carry a `savings` figure, since the deduction is
//! already folded into old-regime taxable income rather than being
//! something the taxpayer still needs to act on.
use crate::finding::{CheckId, Finding};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus};

/// Runs the home-loan-interest check.
pub fn run(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> Finding {
    if profile.home_loan_interest.is_zero() {
        return Finding::not_applicable(
            CheckId::HomeLoanCheck,
            "Home loan interest",
            "No home loan interest declared",
        );
    }

    let cap = Money::from_rupees(tax_math::SECTION_24B_SELF_OCCUPIED_CAP);
    let capped_amount = profile.home_loan_interest.min(cap);
    let excess = profile.home_loan_interest.saturating_sub(cap);

    // old_regime_taxable_income already has this deduction subtracted out;
    // its value is the rate that applied to the rupees it shelters, i.e.
    // the marginal rate one step before this deduction was applied.
    let taxable_income_before_deduction = crate::regime::old_regime_taxable_income(profile, rules) + capped_amount;
    let marginal_rate = tax_math::marginal_rate_with_cess(taxable_income_before_deduction, rules.old_regime_slabs(age));
    let display_saving = capped_amount.multiply_rate(marginal_rate).round_to_rupee();

    let finding = if excess.is_zero() {
        format!("Section 24(b) deduction of {} on home loan interest", capped_amount)
    } else {
        format!(
            "Section 24(b) deduction capped at {} out of {} of home loan interest paid",
            capped_amount, profile.home_loan_interest
        )
    };
    let explanation = if excess.is_zero() {
        format!(
            "The full {} of home loan interest is within the {} self-occupied cap, worth {} at the marginal rate.",
            capped_amount, cap, display_saving
        )
    } else {
        format!(
            "{} of interest exceeds the {} self-occupied cap and is not deductible unless the property is let-out; the deductible {} is worth {} at the marginal rate.",
            excess, cap, capped_amount, display_saving
        )
    };

    Finding {
        check_id: CheckId::HomeLoanCheck,
        check_name: "Home loan interest".to_string(),
        status: FindingStatus::Opportunity,
        finding,
        savings: Money::ZERO,
        action: if excess.is_zero() {
            None
        } else {
            Some(
                "If the property can be classified as let-out, the full interest is deductible without the ₹2,00,000 cap"
                    .to_string(),
            )
        },
        deadline: None,
        confidence: if excess.is_zero() { Confidence::Definite } else { Confidence::NeedsVerification },
        explanation,
        details: serde_json::json!({
            "capped_amount": capped_amount.as_rupees(),
            "display_saving": display_saving.as_rupees(),
            "cap": cap.as_rupees(),
            "excess": excess.as_rupees(),
        }),
    }
}

//! Compares old-regime and new-regime total tax liability and recommends
//! whichever is cheaper.
//!
//! The comparison is deliberately asymmetric: the new regime has nothing
//! left for the taxpayer to optimize, so it is compared at its actual
//! liability. The old regime is compared at its fully-optimized liability
//! (see [`regime::optimized_old_regime_liability`]) — otherwise an
//! under-invested old-regime snapshot would bias the recommendation
//! towards the new regime even when maxing out the old regime's
//! deductions would have been cheaper.

use crate::finding::{CheckId, Finding};
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::regime::{self, Liability};
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::{AgeCategory, Confidence, FindingStatus, Options, Regime};

/// Runs the regime-arbitrage check: computes full liability under both
/// regimes and recommends the cheaper one.
pub fn run(profile: &SalaryProfile, age: AgeCategory, options: &Options, rules: &dyn TaxYearRules) -> Finding {
    let old_optimized = regime::optimized_old_regime_liability(profile, age, options.parents_senior, rules);
    let new = regime::new_regime_liability(profile, rules);

    let current_actual = match profile.current_regime {
        Regime::Old => regime::old_regime_liability(profile, age, rules),
        Regime::New => new,
    };

    let (recommended_regime, cheaper) = if old_optimized.total_tax.as_decimal() < new.total_tax.as_decimal() {
        (Regime::Old, old_optimized)
    } else {
        (Regime::New, new)
    };

    let savings = current_actual.total_tax.saturating_sub(cheaper.total_tax);
    let deductions_needed = deductions_needed_json(profile, age, options);

    let details = serde_json::json!({
        "current_regime": profile.current_regime.as_str(),
        "current_actual": liability_json(&current_actual),
        "old_regime_optimized": liability_json(&old_optimized),
        "new_regime": liability_json(&new),
        "recommended_regime": recommended_regime.as_str(),
        "deductions_needed": deductions_needed,
    });

    if savings.is_zero() {
        Finding {
            check_id: CheckId::RegimeArbitrage,
            check_name: "Regime arbitrage".to_string(),
            status: FindingStatus::Optimized,
            finding: format!("Already filing under the cheaper regime ({})", profile.current_regime),
            savings,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: "Both regimes were compared and the current regime has the lower total liability."
                .to_string(),
            details,
        }
    } else if recommended_regime == profile.current_regime {
        Finding {
            check_id: CheckId::RegimeArbitrage,
            check_name: "Regime arbitrage".to_string(),
            status: FindingStatus::Opportunity,
            finding: format!(
                "Staying on the {} regime but fully using its deductions saves {}",
                recommended_regime, savings
            ),
            savings,
            action: Some("Claim the deductions listed in deductions_needed to reach this liability".to_string()),
            deadline: Some("31 March of this financial year".to_string()),
            confidence: Confidence::Likely,
            explanation: format!(
                "Current liability under the {} regime is {}; fully using available deductions brings it to {}.",
                profile.current_regime, current_actual.total_tax, cheaper.total_tax
            ),
            details,
        }
    } else {
        Finding {
            check_id: CheckId::RegimeArbitrage,
            check_name: "Regime arbitrage".to_string(),
            status: FindingStatus::Opportunity,
            finding: format!("Switching to the {} regime saves {}", recommended_regime, savings),
            savings,
            action: Some(format!("Elect the {} regime for this financial year", recommended_regime)),
            deadline: Some("Before filing the return for this financial year".to_string()),
            confidence: Confidence::Definite,
            explanation: format!(
                "Current liability under the {} regime is {}; the {} regime comes to {}.",
                profile.current_regime, current_actual.total_tax, recommended_regime, cheaper.total_tax
            ),
            details,
        }
    }
}

fn deductions_needed_json(profile: &SalaryProfile, age: AgeCategory, options: &Options) -> serde_json::Value {
    let section_80c_cap = Money::from_rupees(tax_math::SECTION_80C_CAP);
    let section_80ccd_1b_cap = Money::from_rupees(tax_math::SECTION_80CCD_1B_CAP);
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

    let current_80c = (profile.section_80c_investments + profile.epf_employee_contribution).min(section_80c_cap);
    let gap_80c = section_80c_cap.saturating_sub(current_80c);

    let current_nps = profile.nps_contribution_80ccd_1b.min(section_80ccd_1b_cap);
    let gap_nps = section_80ccd_1b_cap.saturating_sub(current_nps);

    let current_80d_self = profile.section_80d_self.min(self_cap);
    let target_80d_self = if matches!(age, AgeCategory::Senior | AgeCategory::SuperSenior) {
        self_cap
    } else {
        Money::ZERO
    };
    let gap_80d_self = target_80d_self.saturating_sub(current_80d_self);

    let current_80d_parents = profile.section_80d_parents.min(parents_cap);
    let gap_80d_parents = parents_cap.saturating_sub(current_80d_parents);

    serde_json::json!({
        "section_80c": gap_80c.as_rupees(),
        "section_80d_self": gap_80d_self.as_rupees(),
        "section_80d_parents": gap_80d_parents.as_rupees(),
        "nps_80ccd_1b": gap_nps.as_rupees(),
    })
}

fn liability_json(l: &Liability) -> serde_json::Value {
    serde_json::json!({
        "taxable_income": l.taxable_income.as_rupees(),
        "tax_before_rebate": l.tax_before_rebate.as_rupees(),
        "rebate": l.rebate.as_rupees(),
        "surcharge": l.surcharge.as_rupees(),
        "cess": l.cess.as_rupees(),
        "total_tax": l.total_tax.as_rupees(),
    })
}

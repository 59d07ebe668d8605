//! Composes `tax_math` primitives with a `SalaryProfile` into full
//! per-regime tax liability breakdowns.
//!
//! This is the seam between the profile-agnostic arithmetic in `tax_math`
//! and the profile-aware checks: every check that needs "what would this
//! person owe under regime X" goes through here instead of re-deriving
//! taxable income itself.

use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::tax_math;
use crate::traits::TaxYearRules;
use crate::types::AgeCategory;
use serde::{Deserialize, Serialize};

/// Full tax liability breakdown for one regime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Liability {
    /// Taxable income after all exemptions and deductions for this regime.
    pub taxable_income: Money,
    /// Tax computed from the slab table, before rebate.
    pub tax_before_rebate: Money,
    /// Section 87A rebate applied, if any.
    pub rebate: Money,
    /// Tax after rebate, before surcharge.
    pub tax_after_rebate: Money,
    /// Surcharge on high incomes, with marginal relief applied.
    pub surcharge: Money,
    /// Health-and-education cess on tax plus surcharge.
    pub cess: Money,
    /// Total tax liability: tax_after_rebate + surcharge + cess.
    pub total_tax: Money,
}

/// Taxable income under the new regime: no HRA exemption, no Chapter VI-A
/// deductions besides the employer's NPS contribution under Section
/// 80CCD(2), the only one the new regime still allows.
pub fn new_regime_taxable_income(profile: &SalaryProfile, rules: &dyn TaxYearRules) -> Money {
    profile
        .gross_salary()
        .saturating_sub(rules.standard_deduction_new())
        .saturating_sub(profile.professional_tax)
        .saturating_sub(profile.deduction_80ccd_2)
}

/// Taxable income under the old regime: HRA exemption, standard deduction,
/// professional tax, and all Chapter VI-A deductions.
pub fn old_regime_taxable_income(profile: &SalaryProfile, rules: &dyn TaxYearRules) -> Money {
    let hra_exemption = tax_math::hra_exemption(
        profile.basic_salary,
        profile.hra_received,
        profile.annual_rent_paid,
        profile.is_metro(),
    );

    let home_loan_deduction = profile
        .home_loan_interest
        .min(Money::from_rupees(tax_math::SECTION_24B_SELF_OCCUPIED_CAP));

    profile
        .gross_salary()
        .saturating_sub(hra_exemption)
        .saturating_sub(rules.standard_deduction_old())
        .saturating_sub(profile.professional_tax)
        .saturating_sub(profile.total_chapter_via())
        .saturating_sub(home_loan_deduction)
}

/// Chapter VI-A deductions under a hypothetical fully-optimized old-regime
/// scenario: 80C and 80CCD(1B) maxed to their statutory caps, and 80D taken
/// at whichever is larger of the taxpayer's actual premium or the age-based
/// target (parents' cover for a non-senior taxpayer, self plus parents'
/// cover for a senior one).
pub fn optimized_chapter_via(profile: &SalaryProfile, age: AgeCategory, parents_senior: bool) -> Money {
    let section_80c = Money::from_rupees(tax_math::SECTION_80C_CAP);
    let section_80ccd_1b = Money::from_rupees(tax_math::SECTION_80CCD_1B_CAP);

    let self_cap = Money::from_rupees(if matches!(age, AgeCategory::Senior | AgeCategory::SuperSenior) {
        tax_math::SECTION_80D_SELF_CAP_SENIOR
    } else {
        tax_math::SECTION_80D_SELF_CAP_BELOW_SIXTY
    });
    let parents_cap = Money::from_rupees(if parents_senior {
        tax_math::SECTION_80D_PARENTS_CAP_SENIOR
    } else {
        tax_math::SECTION_80D_PARENTS_CAP_BELOW_SIXTY
    });
    let current_80d = profile.section_80d_self.min(self_cap) + profile.section_80d_parents.min(parents_cap);
    let target_80d = if matches!(age, AgeCategory::Senior | AgeCategory::SuperSenior) {
        self_cap + parents_cap
    } else {
        parents_cap
    };
    let section_80d = current_80d.max(target_80d);

    section_80c + section_80ccd_1b + section_80d
}

/// Taxable income under the same optimized old-regime scenario as
/// [`optimized_chapter_via`]; HRA and Section 24(b) are unchanged since
/// neither is a declared amount the taxpayer can simply max out.
pub fn optimized_old_regime_taxable_income(
    profile: &SalaryProfile,
    age: AgeCategory,
    parents_senior: bool,
    rules: &dyn TaxYearRules,
) -> Money {
    let hra_exemption = tax_math::hra_exemption(
        profile.basic_salary,
        profile.hra_received,
        profile.annual_rent_paid,
        profile.is_metro(),
    );
    let home_loan_deduction = profile
        .home_loan_interest
        .min(Money::from_rupees(tax_math::SECTION_24B_SELF_OCCUPIED_CAP));

    profile
        .gross_salary()
        .saturating_sub(hra_exemption)
        .saturating_sub(rules.standard_deduction_old())
        .saturating_sub(profile.professional_tax)
        .saturating_sub(optimized_chapter_via(profile, age, parents_senior))
        .saturating_sub(home_loan_deduction)
}

/// Computes the full new-regime liability for this profile.
pub fn new_regime_liability(profile: &SalaryProfile, rules: &dyn TaxYearRules) -> Liability {
    let taxable_income = new_regime_taxable_income(profile, rules);
    liability_from_taxable_income(
        taxable_income,
        rules.new_regime_slabs(),
        rules.rebate_new(),
        rules.surcharge_slabs_new(),
    )
}

/// Computes the full old-regime liability for this profile at the given
/// age category.
pub fn old_regime_liability(profile: &SalaryProfile, age: AgeCategory, rules: &dyn TaxYearRules) -> Liability {
    let taxable_income = old_regime_taxable_income(profile, rules);
    liability_from_taxable_income(
        taxable_income,
        rules.old_regime_slabs(age),
        rules.rebate_old(),
        rules.surcharge_slabs_old(),
    )
}

/// Computes the old-regime liability this profile would owe under the
/// fully-optimized deduction scenario (see [`optimized_chapter_via`]),
/// rather than its actual declared deductions. Used by the regime-arbitrage
/// check so a switch recommendation reflects the best the old regime can
/// do, not an under-invested snapshot of it.
pub fn optimized_old_regime_liability(
    profile: &SalaryProfile,
    age: AgeCategory,
    parents_senior: bool,
    rules: &dyn TaxYearRules,
) -> Liability {
    let taxable_income = optimized_old_regime_taxable_income(profile, age, parents_senior, rules);
    liability_from_taxable_income(
        taxable_income,
        rules.old_regime_slabs(age),
        rules.rebate_old(),
        rules.surcharge_slabs_old(),
    )
}

fn liability_from_taxable_income(
    taxable_income: Money,
    slabs: &[crate::traits::TaxBracket],
    rebate: crate::traits::RebateRule,
    surcharge_slabs: &[crate::traits::SurchargeBracket],
) -> Liability {
    let tax_before_rebate = tax_math::tax_on_slabs(taxable_income, slabs);
    let tax_after_rebate_unrounded =
        tax_math::apply_87a_rebate(tax_before_rebate, taxable_income, rebate.ceiling, rebate.max_rebate);
    let rebate_applied = tax_before_rebate.saturating_sub(tax_after_rebate_unrounded);
    let surcharge = tax_math::surcharge(taxable_income, tax_after_rebate_unrounded, surcharge_slabs, slabs);
    let cess = tax_math::apply_cess(tax_after_rebate_unrounded + surcharge);
    let total_tax = tax_after_rebate_unrounded + surcharge + cess;

    Liability {
        taxable_income,
        tax_before_rebate,
        rebate: rebate_applied,
        tax_after_rebate: tax_after_rebate_unrounded,
        surcharge,
        cess,
        total_tax,
    }
}

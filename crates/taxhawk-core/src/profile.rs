//! Salary profile: the primary input to the optimization engine.

use crate::error::ValidationErrors;
use crate::money::Money;
use crate::types::{City, FinancialYear, Regime};
use serde::{Deserialize, Serialize};

/// A salaried individual's full tax profile for one financial year.
///
/// Fields are grouped by kind: identity, salary components, rent, salary-head
/// deductions, Chapter VI-A deductions, and the taxpayer's own declared
/// figures (used as a baseline to compare optimizer recommendations
/// against).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryProfile {
    /// Financial year this profile applies to.
    pub financial_year: FinancialYear,
    /// City of residence, for HRA metro/non-metro classification.
    pub city: City,
    /// Regime the taxpayer currently files under.
    pub current_regime: Regime,

    /// Basic salary, annual.
    pub basic_salary: Money,
    /// HRA received, annual.
    pub hra_received: Money,
    /// Other taxable salary components (special allowance, bonus, etc.).
    pub other_salary: Money,

    /// Rent actually paid, annual.
    pub annual_rent_paid: Money,
    /// Monthly rent paid, used by checks that want a monthly figure.
    pub monthly_rent: Money,

    /// Professional tax deducted by the employer, annual. Deductible under
    /// both regimes, straight off gross salary.
    pub professional_tax: Money,
    /// Employer's NPS contribution under Section 80CCD(2). The only
    /// Chapter VI-A-adjacent deduction the new regime still allows.
    pub deduction_80ccd_2: Money,

    /// Employee's own EPF contribution, annual.
    pub epf_employee_contribution: Money,

    /// Section 80C investments (ELSS, PPF, life insurance, etc.), excluding
    /// EPF which is tracked separately.
    pub section_80c_investments: Money,
    /// Section 80CCD(1B) additional NPS contribution.
    pub nps_contribution_80ccd_1b: Money,
    /// Section 80D health insurance premium paid for self and family.
    pub section_80d_self: Money,
    /// Section 80D health insurance premium paid for parents.
    pub section_80d_parents: Money,
    /// Section 24(b) interest paid on a home loan for a self-occupied
    /// property.
    pub home_loan_interest: Money,

    /// Taxable income the taxpayer has declared to their employer or in a
    /// prior return, used as a sanity baseline — not trusted as
    /// authoritative. Validation against it is advisory only.
    pub declared_taxable_income: Option<Money>,
}

impl SalaryProfile {
    /// Gross salary before any Section 10 exemption or standard deduction.
    pub fn gross_salary(&self) -> Money {
        self.basic_salary + self.hra_received + self.other_salary
    }

    /// True if the taxpayer's declared city is classified as a metro.
    pub fn is_metro(&self) -> bool {
        self.city.is_metro()
    }

    /// Sum of all Chapter VI-A deductions available under the old regime
    /// (80C including EPF, 80CCD(1B), 80D self and parents); does not
    /// include Section 24(b), which is a salary-head deduction, not a
    /// Chapter VI-A one.
    pub fn total_chapter_via(&self) -> Money {
        let section_80c = (self.section_80c_investments + self.epf_employee_contribution)
            .min(Money::from_rupees(crate::tax_math::SECTION_80C_CAP));
        let section_80ccd_1b = self
            .nps_contribution_80ccd_1b
            .min(Money::from_rupees(crate::tax_math::SECTION_80CCD_1B_CAP));
        section_80c + section_80ccd_1b + self.section_80d_self + self.section_80d_parents
    }

    /// Advisory validation: flags profiles that are internally inconsistent
    /// or implausible, without blocking calculation.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.basic_salary.is_negative() {
            errors.add_error("basic_salary", "basic_salary is negative");
        }
        if self.hra_received.is_negative() {
            errors.add_error("hra_received", "hra_received is negative");
        }
        if self.other_salary.is_negative() {
            errors.add_error("other_salary", "other_salary is negative");
        }
        if self.annual_rent_paid.is_negative() {
            errors.add_error("annual_rent_paid", "annual_rent_paid is negative");
        }

        let cap_80c = Money::from_rupees(crate::tax_math::SECTION_80C_CAP);
        if self.section_80c_investments + self.epf_employee_contribution > cap_80c {
            errors.add_warning(
                "section_80c_investments",
                "combined 80C contribution exceeds the statutory cap; excess is ignored",
            );
        }

        if self.monthly_rent.as_decimal() * rust_decimal::Decimal::from(12)
            != self.annual_rent_paid.as_decimal()
            && !self.annual_rent_paid.is_zero()
            && !self.monthly_rent.is_zero()
        {
            errors.add_warning(
                "monthly_rent",
                "monthly_rent * 12 does not match annual_rent_paid",
            );
        }

        errors
    }
}

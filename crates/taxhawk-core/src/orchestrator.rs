//! Orchestrates the seven checks into one `Report`.

use crate::checks::{capital_gains, home_loan, hra_optimizer, nps_check, regime_arbitrage, section_80c, section_80d};
use crate::finding::{CheckId, Finding, Report};
use crate::holdings::Holdings;
use crate::money::Money;
use crate::profile::SalaryProfile;
use crate::rules::RulesLoader;
use crate::types::{AgeCategory, FindingStatus, Options, Regime};
use chrono::NaiveDate;

/// Runs every check against a profile and assembles the final report.
///
/// `today` is the evaluation date for time-sensitive checks (capital
/// gains' holding-period math); callers in a live deployment pass the
/// actual current date, tests pass a fixed one for determinism.
pub fn run(profile: &SalaryProfile, holdings: &Holdings, options: &Options, today: NaiveDate) -> Report {
    let loader = RulesLoader::new();
    let rules = loader.load(profile.financial_year);
    let age = if options.self_senior { AgeCategory::Senior } else { AgeCategory::BelowSixty };

    let regime_finding = regime_arbitrage::run(profile, age, options, rules.as_ref());
    let recommended_regime = recommended_regime_from(&regime_finding, profile.current_regime);

    // Old-regime-only checks become moot once switching to the new regime
    // is the recommendation: improving old-regime deductions can't change
    // a comparison the new regime already wins. Each check still computes
    // its real figures first; only suppression is conditional, so a
    // suppressed finding can still say what it would have been worth.
    let old_regime_checks_apply = recommended_regime == Regime::Old;

    let mut section_80c_finding = section_80c::run(profile, age, rules.as_ref());
    let mut section_80d_finding = section_80d::run(profile, age, options, rules.as_ref());
    let mut hra_finding = hra_optimizer::run(profile, age, rules.as_ref());
    let mut nps_finding = nps_check::run(profile, age, rules.as_ref());
    let mut home_loan_finding = home_loan::run(profile, age, rules.as_ref());

    if !old_regime_checks_apply {
        section_80c_finding = suppress_under_new_regime(section_80c_finding);
        section_80d_finding = suppress_under_new_regime(section_80d_finding);
        hra_finding = suppress_under_new_regime(hra_finding);
        nps_finding = suppress_under_new_regime(nps_finding);
        home_loan_finding = suppress_under_new_regime(home_loan_finding);
    }

    let capital_gains_finding = capital_gains::run(holdings, options, today);

    // Only regime-arbitrage and capital-gains savings are summed: the
    // deduction checks' savings are already folded into whichever
    // regime's total tax the arbitrage check compared.
    let total_savings = regime_finding.savings + capital_gains_finding.savings;

    let checks = vec![
        regime_finding.clone(),
        section_80c_finding,
        section_80d_finding,
        hra_finding,
        nps_finding,
        home_loan_finding,
        capital_gains_finding,
    ];

    let opportunity_count = checks.iter().filter(|f| f.status == FindingStatus::Opportunity).count();

    let summary = if total_savings.is_zero() && opportunity_count == 0 {
        "No further optimization opportunities were found for this profile.".to_string()
    } else {
        format!(
            "Found {} opportunit{} with a combined estimated annual savings of {}.",
            opportunity_count,
            if opportunity_count == 1 { "y" } else { "ies" },
            total_savings
        )
    };

    Report {
        financial_year: profile.financial_year,
        current_regime: profile.current_regime,
        recommended_regime,
        total_savings,
        checks,
        summary,
        disclaimer:
            "This report is a deterministic estimate based on the inputs provided. It is not professional tax advice; verify all figures before filing."
                .to_string(),
    }
}

fn recommended_regime_from(regime_finding: &Finding, current_regime: Regime) -> Regime {
    match regime_finding.status {
        FindingStatus::Optimized => current_regime,
        _ => regime_finding
            .details
            .get("recommended_regime")
            .and_then(|v| v.as_str())
            .map(|s| if s == "new" { Regime::New } else { Regime::Old })
            .unwrap_or(current_regime),
    }
}

/// Rewrites an already-computed old-regime-only finding to reflect that the
/// recommended regime makes it moot, while preserving the real figure it
/// computed rather than discarding it behind a generic placeholder.
fn suppress_under_new_regime(finding: Finding) -> Finding {
    let original_savings = finding.savings;
    let message = if original_savings.is_zero() {
        "Not applicable under the new regime".to_string()
    } else {
        format!("Not applicable under the new regime (would save {} under the old regime)", original_savings)
    };

    Finding {
        check_id: finding.check_id,
        check_name: finding.check_name,
        status: FindingStatus::NotApplicable,
        finding: message,
        savings: Money::ZERO,
        action: None,
        deadline: None,
        confidence: finding.confidence,
        explanation: "This deduction only applies under the old regime, which is not the recommended regime for this profile.".to_string(),
        details: finding.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{City, FinancialYear};

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
    fn test_report_has_all_seven_checks() {
        let profile = profile();
        let holdings = Holdings::default();
        let options = Options::default();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = run(&profile, &holdings, &options, today);
        assert_eq!(report.checks.len(), 7);
    }

    #[test]
    fn test_total_savings_never_double_counts_deduction_checks() {
        let profile = profile();
        let holdings = Holdings::default();
        let options = Options::default();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = run(&profile, &holdings, &options, today);
        let regime = report.check(CheckId::RegimeArbitrage).unwrap();
        let cg = report.check(CheckId::CapitalGains).unwrap();
        assert_eq!(report.total_savings, regime.savings + cg.savings);
    }
}

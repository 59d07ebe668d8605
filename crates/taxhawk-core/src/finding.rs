//! The optimizer's output: one `Finding` per check, rolled up into a
//! `Report`.

use crate::money::Money;
use crate::types::{Confidence, FinancialYear, FindingStatus, Regime};
use serde::{Deserialize, Serialize};

/// Stable identifiers for each check, used as the wire-level key.
/// Consumers depend on these tokens staying stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(clippy::enum_variant_names)]
pub enum CheckId {
    RegimeArbitrage,
    Section80cGap,
    Section80dCheck,
    HraOptimizer,
    CapitalGains,
    NpsCheck,
    HomeLoanCheck,
}

impl CheckId {
    /// Returns the stable lowercase token consumers may depend on.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::RegimeArbitrage => "regime_arbitrage",
            CheckId::Section80cGap => "80c_gap",
            CheckId::Section80dCheck => "80d_check",
            CheckId::HraOptimizer => "hra_optimizer",
            CheckId::CapitalGains => "capital_gains",
            CheckId::NpsCheck => "nps_check",
            CheckId::HomeLoanCheck => "home_loan_check",
        }
    }
}

/// The result of one check: an opportunity, a confirmation of existing
/// optimal behavior, or a statement that the check does not apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier for which check produced this finding.
    pub check_id: CheckId,
    /// Human-readable name of the check.
    pub check_name: String,
    /// Status of this finding.
    pub status: FindingStatus,
    /// One-line summary of what was found.
    pub finding: String,
    /// Rupees saved annually if the recommended action is taken; zero for
    /// `Optimized`/`NotApplicable` findings.
    pub savings: Money,
    /// Concrete action the taxpayer should take, if any.
    pub action: Option<String>,
    /// Deadline by which the action must be taken, if time-sensitive.
    pub deadline: Option<String>,
    /// How confident the engine is in this finding.
    pub confidence: Confidence,
    /// Longer explanation of the reasoning behind the finding.
    pub explanation: String,
    /// Free-form structured details specific to this check (e.g., the
    /// regime comparison breakdown, or the lots driving a capital-gains
    /// finding), for consumers that want to render more than the summary.
    pub details: serde_json::Value,
}

impl Finding {
    /// Builds a `NotApplicable` finding with zero savings — the default
    /// shape most checks fall back to when their inputs don't apply.
    pub fn not_applicable(check_id: CheckId, check_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            check_id,
            check_name: check_name.into(),
            status: FindingStatus::NotApplicable,
            finding: reason.into(),
            savings: Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: String::new(),
            details: serde_json::Value::Null,
        }
    }
}

/// The full optimization report for one profile, across all checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Financial year this report covers.
    pub financial_year: FinancialYear,
    /// Regime the taxpayer is currently filing under.
    pub current_regime: Regime,
    /// Regime the engine recommends, based on the regime-arbitrage check.
    pub recommended_regime: Regime,
    /// Total annual savings across all opportunities, without double
    /// counting regime-dependent amounts: only `regime.savings +
    /// capital_gains.savings` are summed, since the deduction checks'
    /// savings are already folded into whichever regime's liability the
    /// arbitrage check compared.
    pub total_savings: Money,
    /// One finding per check, in a fixed order.
    pub checks: Vec<Finding>,
    /// One-paragraph plain-language summary.
    pub summary: String,
    /// Standard disclaimer that this is not professional tax advice.
    pub disclaimer: String,
}

impl Report {
    /// Returns the finding for a specific check, if present.
    pub fn check(&self, id: CheckId) -> Option<&Finding> {
        self.checks.iter().find(|f| f.check_id == id)
    }

    /// Returns all findings with `FindingStatus::Opportunity`.
    pub fn opportunities(&self) -> impl Iterator<Item = &Finding> {
        self.checks.iter().filter(|f| f.status == FindingStatus::Opportunity)
    }
}

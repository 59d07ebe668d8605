//! Checks unrealized long-term capital gains against the annual LTCG
//! exemption and flags lots nearing the long-term threshold. Applies
//! identically under both regimes — capital gains tax rates do not depend
//! on the salary regime election.

use crate::finding::{CheckId, Finding};
use crate::holdings::Holdings;
use crate::money::Money;
use crate::tax_math;
use crate::types::{Confidence, FindingStatus, Options};
use chrono::NaiveDate;

/// Runs the capital-gains check.
pub fn run(holdings: &Holdings, options: &Options, today: NaiveDate) -> Finding {
    if holdings.lots.is_empty() {
        return Finding::not_applicable(CheckId::CapitalGains, "Capital gains", "No holdings declared");
    }

    let as_of = options.cg_as_of.unwrap_or(today);
    let (unrealized_stcg, unrealized_ltcg) = holdings.unrealized_split(as_of);

    let exemption = Money::from_rupees(tax_math::LTCG_EXEMPTION);
    let realized_ltcg_after_exemption = holdings.realized_ltcg_this_fy.saturating_sub(exemption);
    let remaining_exemption = exemption.saturating_sub(holdings.realized_ltcg_this_fy);

    let nearing = holdings.lots_nearing_long_term(as_of, 90);

    let harvestable_ltcg_gain = unrealized_ltcg.min(remaining_exemption).non_negative();

    let mut details = serde_json::json!({
        "unrealized_stcg": unrealized_stcg.as_rupees(),
        "unrealized_ltcg": unrealized_ltcg.as_rupees(),
        "realized_ltcg_this_fy": holdings.realized_ltcg_this_fy.as_rupees(),
        "remaining_exemption": remaining_exemption.as_rupees(),
        "lots_nearing_long_term": nearing.len(),
    });

    if realized_ltcg_after_exemption.is_zero() && harvestable_ltcg_gain.is_zero() && nearing.is_empty() {
        return Finding {
            check_id: CheckId::CapitalGains,
            check_name: "Capital gains".to_string(),
            status: FindingStatus::NotApplicable,
            finding: "No actionable capital-gains opportunity this year".to_string(),
            savings: Money::ZERO,
            action: None,
            deadline: None,
            confidence: Confidence::Definite,
            explanation: "Realized LTCG is within the exemption and no lots are approaching long-term status."
                .to_string(),
            details,
        };
    }

    let harvest_savings = harvestable_ltcg_gain.multiply_rate(tax_math::effective_ltcg_rate()).round_to_rupee();

    if !harvest_savings.is_zero() {
        details["harvestable_gain"] = serde_json::json!(harvestable_ltcg_gain.as_rupees());
        return Finding {
            check_id: CheckId::CapitalGains,
            check_name: "Capital gains".to_string(),
            status: FindingStatus::Opportunity,
            finding: format!(
                "{} of long-term gains can be harvested tax-free within the annual exemption",
                harvestable_ltcg_gain
            ),
            savings: harvest_savings,
            action: Some(format!(
                "Book {} of long-term gains before the end of the financial year to use the remaining exemption",
                harvestable_ltcg_gain
            )),
            deadline: Some("31 March of this financial year".to_string()),
            confidence: Confidence::Likely,
            explanation: format!(
                "The annual LTCG exemption of {} has {} remaining; harvesting gains up to that amount avoids {} tax at the cess-inclusive LTCG rate.",
                Money::from_rupees(tax_math::LTCG_EXEMPTION),
                remaining_exemption,
                harvest_savings
            ),
            details,
        };
    }

    Finding {
        check_id: CheckId::CapitalGains,
        check_name: "Capital gains".to_string(),
        status: FindingStatus::Opportunity,
        finding: format!("{} lot(s) will become long-term within 90 days", nearing.len()),
        savings: Money::ZERO,
        action: Some("Consider delaying sale of these lots until they qualify for the lower long-term rate".to_string()),
        deadline: None,
        confidence: Confidence::NeedsVerification,
        explanation: "Selling before the long-term threshold would tax these gains at the higher short-term rate."
            .to_string(),
        details,
    }
}

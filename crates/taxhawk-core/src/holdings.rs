//! Investment holdings used by the capital-gains and redemption checks.

use crate::money::Money;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of security a holding represents, which determines the
/// long-term holding-period threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    EquityShare,
    EquityMutualFund,
    DebtMutualFund,
    Elss,
    Other,
}

impl SecurityType {
    /// Months a holding of this type must be held to qualify as long-term.
    fn long_term_threshold_months(&self) -> i32 {
        match self {
            SecurityType::EquityShare | SecurityType::EquityMutualFund | SecurityType::Elss => 12,
            SecurityType::DebtMutualFund | SecurityType::Other => 24,
        }
    }
}

/// A single lot of a security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Security name, for display only.
    pub security_name: String,
    /// Kind of security, determines the long-term threshold.
    pub security_type: SecurityType,
    /// Date this lot was purchased.
    pub purchase_date: NaiveDate,
    /// Price per unit at purchase.
    pub purchase_price: Decimal,
    /// Quantity held.
    pub quantity: Decimal,
    /// Current price per unit.
    pub current_price: Decimal,
}

impl Holding {
    /// Total cost basis of this lot.
    pub fn total_cost(&self) -> Money {
        Money::new(self.purchase_price * self.quantity)
    }

    /// Current market value of this lot.
    pub fn current_value(&self) -> Money {
        Money::new(self.current_price * self.quantity)
    }

    /// Unrealized gain (or loss, if negative) on this lot as of today's
    /// market price.
    pub fn unrealized_gain(&self) -> Money {
        self.current_value() - self.total_cost()
    }

    /// Whole calendar months held as of `as_of`, counting only completed
    /// months (a lot purchased on the 15th and evaluated on the 10th of the
    /// following month has been held 0 whole months).
    pub fn holding_months(&self, as_of: NaiveDate) -> i32 {
        let years = as_of.year() - self.purchase_date.year();
        let mut months = years * 12 + (as_of.month() as i32 - self.purchase_date.month() as i32);
        if as_of.day() < self.purchase_date.day() {
            months -= 1;
        }
        months.max(0)
    }

    /// Whether this lot qualifies as long-term as of `as_of`.
    pub fn is_long_term(&self, as_of: NaiveDate) -> bool {
        self.holding_months(as_of) > self.security_type.long_term_threshold_months()
    }
}

/// A taxpayer's full set of investment holdings for one financial year,
/// plus gains already realized through sales this year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holdings {
    /// Unsold lots, used to project future gains and plan redemptions.
    pub lots: Vec<Holding>,
    /// Short-term capital gains already realized this financial year.
    pub realized_stcg_this_fy: Money,
    /// Long-term capital gains already realized this financial year.
    pub realized_ltcg_this_fy: Money,
}

impl Holdings {
    /// Splits unrealized gains across all lots into short-term and
    /// long-term totals as of `as_of`. Gains and losses within the same
    /// holding-period bucket net against each other before further analysis.
    pub fn unrealized_split(&self, as_of: NaiveDate) -> (Money, Money) {
        let mut stcg = Money::ZERO;
        let mut ltcg = Money::ZERO;
        for lot in &self.lots {
            let gain = lot.unrealized_gain();
            if lot.is_long_term(as_of) {
                ltcg += gain;
            } else {
                stcg += gain;
            }
        }
        (stcg, ltcg)
    }

    /// Lots that will cross into long-term status within the next `days`
    /// days as of `as_of` — candidates for a "wait and save" finding.
    pub fn lots_nearing_long_term(&self, as_of: NaiveDate, days: i64) -> Vec<&Holding> {
        self.lots
            .iter()
            .filter(|lot| !lot.is_long_term(as_of))
            .filter(|lot| {
                let threshold_months = lot.security_type.long_term_threshold_months();
                let months_held = lot.holding_months(as_of);
                if months_held < threshold_months {
                    let remaining_months = threshold_months - months_held;
                    remaining_months <= (days / 30 + 1) as i32
                } else {
                    false
                }
            })
            .collect()
    }
}

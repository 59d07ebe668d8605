//! Core types used throughout the tax optimization engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported financial years.
///
/// Slabs, rebates, and standard deductions are looked up from immutable
/// tables keyed by this enum rather than computed. Unknown years fall back
/// to `Fy2024_25` wherever a caller must convert from a raw year number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialYear {
    #[serde(rename = "2024-25")]
    Fy2024_25,
    #[serde(rename = "2025-26")]
    Fy2025_26,
}

impl FinancialYear {
    /// Parses a raw "YYYY-YY" style label, falling back to FY 2024-25 for
    /// anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "2025-26" => FinancialYear::Fy2025_26,
            _ => FinancialYear::Fy2024_25,
        }
    }

    /// Returns the canonical label for this financial year.
    pub fn label(&self) -> &'static str {
        match self {
            FinancialYear::Fy2024_25 => "2024-25",
            FinancialYear::Fy2025_26 => "2025-26",
        }
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FY {}", self.label())
    }
}

/// Tax regime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    /// Returns the stable lowercase token consumers may depend on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Old => "old",
            Regime::New => "new",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age category, selects the old-regime slab table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    BelowSixty,
    Senior,
    SuperSenior,
}

/// City token used to classify HRA metro/non-metro status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(pub String);

const METRO_CITIES: [&str; 4] = ["mumbai", "delhi", "kolkata", "chennai"];

impl City {
    /// Creates a new city token.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns true if this city is classified as metro for HRA purposes.
    pub fn is_metro(&self) -> bool {
        let lower = self.0.to_lowercase();
        METRO_CITIES.contains(&lower.as_str())
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a single optimization finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Opportunity,
    Optimized,
    NotApplicable,
}

impl FindingStatus {
    /// Returns the stable lowercase token consumers may depend on.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Opportunity => "opportunity",
            FindingStatus::Optimized => "optimized",
            FindingStatus::NotApplicable => "not_applicable",
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confidence level attached to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Definite,
    Likely,
    NeedsVerification,
}

impl Confidence {
    /// Returns the stable lowercase token consumers may depend on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Definite => "definite",
            Confidence::Likely => "likely",
            Confidence::NeedsVerification => "needs_verification",
        }
    }
}

/// Caller-supplied options that steer per-profile assumptions the checks
/// can't derive from `SalaryProfile` alone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Options {
    /// Whether either parent is a senior citizen, for the 80D self/parent
    /// limit split.
    pub parents_senior: bool,
    /// Whether the taxpayer themselves is a senior citizen.
    pub self_senior: bool,
    /// Explicit "as of" date for the capital-gains check; `None` uses the
    /// date the report is generated.
    pub cg_as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_year_fallback() {
        assert_eq!(FinancialYear::from_label("2099-00"), FinancialYear::Fy2024_25);
        assert_eq!(FinancialYear::from_label("2025-26"), FinancialYear::Fy2025_26);
    }

    #[test]
    fn test_city_is_metro_case_insensitive() {
        assert!(City::new("Mumbai").is_metro());
        assert!(City::new("CHENNAI").is_metro());
        assert!(!City::new("Pune").is_metro());
    }

    #[test]
    fn test_stable_tokens() {
        assert_eq!(FindingStatus::Opportunity.as_str(), "opportunity");
        assert_eq!(FindingStatus::Optimized.as_str(), "optimized");
        assert_eq!(FindingStatus::NotApplicable.as_str(), "not_applicable");
        assert_eq!(Regime::Old.as_str(), "old");
        assert_eq!(Regime::New.as_str(), "new");
    }
}

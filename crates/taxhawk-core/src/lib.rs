//! A deterministic, side-effect-free tax optimization engine for salaried
//! individuals under Indian income tax law.
//!
//! The engine has no I/O and does no network or filesystem access: every
//! public entry point is a pure function from inputs to a `Report`. Callers
//! own persistence, logging, and scheduling; this crate owns the
//! calculation.

pub mod checks;
pub mod error;
pub mod estimators;
pub mod finding;
pub mod holdings;
pub mod money;
pub mod orchestrator;
pub mod profile;
pub mod redemption;
pub mod regime;
pub mod rules;
pub mod tax_math;
pub mod traits;
pub mod types;

pub use error::{TaxError, TaxResult, ValidationError, ValidationErrors, ValidationSeverity};
pub use finding::{CheckId, Finding, Report};
pub use holdings::{Holding, Holdings, SecurityType};
pub use money::Money;
pub use orchestrator::run;
pub use profile::SalaryProfile;
pub use rules::RulesLoader;
pub use traits::{RebateRule, SurchargeBracket, TaxBracket, TaxYearRules};
pub use types::{AgeCategory, City, Confidence, FinancialYear, FindingStatus, Options, Regime};

//! Core traits for the tax optimization engine.

mod rules;

pub use rules::{RebateRule, SurchargeBracket, TaxBracket, TaxYearRules};

//! Error types for the tax optimization engine.

use crate::types::FinancialYear;
use thiserror::Error;

/// Errors that can occur while loading statutory rules or validating input.
///
/// Check functions and the orchestrator never return this type: a malformed
/// profile yields a `NotApplicable` or zero-savings `Finding`, not an `Err`.
/// This exists for the advisory validation surface and for
/// `RulesLoader::load`.
#[derive(Debug, Error)]
pub enum TaxError {
    /// Financial year is not supported.
    #[error("financial year {0} is not supported")]
    UnsupportedFinancialYear(String),

    /// Missing required input.
    #[error("missing required input: {0}")]
    MissingInput(String),

    /// Invalid input value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// Negative amount where not allowed.
    #[error("negative amount not allowed for {field}: got {value}")]
    NegativeAmount { field: String, value: String },

    /// Rule data not found for the given year.
    #[error("tax rules not found for year {0:?}")]
    RulesNotFound(FinancialYear),

    /// JSON parsing error (surfaced when a caller round-trips profiles).
    #[error("failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// Calculation overflow.
    #[error("calculation overflow: {0}")]
    Overflow(String),
}

/// Result type alias for tax operations.
pub type TaxResult<T> = Result<T, TaxError>;

/// Validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Error message.
    pub message: String,
    /// Severity level.
    pub severity: ValidationSeverity,
}

/// Severity of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Error: the profile is malformed but calculation still proceeds,
    /// clamped at use sites.
    Error,
    /// Warning: informational only.
    Warning,
}

impl ValidationError {
    /// Creates a new error-level validation error.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    /// Creates a new warning-level validation error.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Collection of validation errors, advisory only: the engine does not
/// reject profiles that violate them.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty validation errors collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validation error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds an error-level validation error.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::error(field, message));
    }

    /// Adds a warning-level validation error.
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::warning(field, message));
    }

    /// Returns true if there are any errors (not warnings).
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Error)
    }

    /// Returns true if there are no errors or warnings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors (not warnings).
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Error)
    }

    /// Returns all warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Warning)
    }

    /// Returns all validation errors and warnings.
    pub fn all(&self) -> &[ValidationError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_error_vs_warning() {
        let mut errors = ValidationErrors::new();
        errors.add_warning("rent", "rent is unusually high");
        assert!(!errors.has_errors());
        errors.add_error("gross_salary", "gross_salary is negative");
        assert!(errors.has_errors());
        assert_eq!(errors.errors().count(), 1);
        assert_eq!(errors.warnings().count(), 1);
    }
}

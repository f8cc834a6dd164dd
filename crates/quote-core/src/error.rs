//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - Rejected quote input                           │
//! │  └── ValidationError  - A single field failing a form rule             │
//! │                                                                         │
//! │  quote-export errors (separate crate)                                  │
//! │  └── ExportError      - Rendering / writing a quotation failed         │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! The calculation engine itself never fails. These errors only come from
//! the caller-side validation the form runs before invoking it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while preparing a quote.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or more form fields failed validation.
    ///
    /// ## When This Occurs
    /// - Customer name left blank
    /// - Store count below one
    /// - Any cost field zero or negative
    ///
    /// All failures are collected so the form can flag every field at once.
    #[error("Invalid quote input: {}", join_errors(.0))]
    InvalidQuote(Vec<ValidationError>),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// The individual field errors behind this error.
    pub fn field_errors(&self) -> Vec<&ValidationError> {
        match self {
            CoreError::InvalidQuote(errors) => errors.iter().collect(),
            CoreError::Validation(err) => vec![err],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        assert_eq!(err.to_string(), "customerName is required");

        let err = ValidationError::BelowMinimum {
            field: "numberOfStores".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "numberOfStores must be at least 1");
    }

    #[test]
    fn test_invalid_quote_lists_every_field() {
        let err = CoreError::InvalidQuote(vec![
            ValidationError::Required {
                field: "customerName".to_string(),
            },
            ValidationError::MustBePositive {
                field: "hardwareCost".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid quote input: customerName is required; hardwareCost must be positive"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "hardwareCost".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.field_errors()[0].field(), "hardwareCost");
    }
}

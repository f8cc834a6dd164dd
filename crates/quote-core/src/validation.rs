//! # Validation Module
//!
//! Form rules checked before a quote is calculated.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form / CLI arguments                                         │
//! │  ├── Type validation (parsing, deserialization)                        │
//! │  └── THIS MODULE: field rules, every failure collected                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculation engine                                           │
//! │  └── Accepts anything, never fails                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::validation::validate_quote_input;
//! use quote_core::{CostComponents, CustomerInfo};
//!
//! let ok = validate_quote_input(&CustomerInfo::new("Cafe Sài Gòn", 2), &CostComponents::default());
//! assert!(ok.is_ok());
//!
//! let err = validate_quote_input(&CustomerInfo::new("  ", 0), &CostComponents::default());
//! assert_eq!(err.unwrap_err().field_errors().len(), 2);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CostComponents, CustomerInfo};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted customer name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Longest accepted company / address / contact text.
pub const MAX_TEXT_LENGTH: usize = 500;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customerName".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "customerName".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates optional free text (company, address, contact).
pub fn validate_optional_text(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(text) if text.chars().count() > MAX_TEXT_LENGTH => Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LENGTH,
        }),
        _ => Ok(()),
    }
}

/// Validates the number of stores.
///
/// ## Example
/// ```rust
/// use quote_core::validation::validate_store_count;
///
/// assert!(validate_store_count(1).is_ok());
/// assert!(validate_store_count(0).is_err());
/// ```
pub fn validate_store_count(stores: i64) -> ValidationResult<()> {
    if stores < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "numberOfStores".to_string(),
            min: 1,
        });
    }

    Ok(())
}

/// Validates a cost field. Every cost on a quote must be strictly positive.
pub fn validate_cost_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Whole-Form Validation
// =============================================================================

/// Runs every form rule and reports all failures together.
///
/// ## Returns
/// - `Ok(())` when the quote may be calculated
/// - `Err(CoreError::InvalidQuote(..))` listing each failing field in form
///   order
pub fn validate_quote_input(customer: &CustomerInfo, costs: &CostComponents) -> CoreResult<()> {
    let mut checks = vec![
        validate_customer_name(&customer.customer_name),
        validate_optional_text("companyName", customer.company_name.as_deref()),
        validate_optional_text("address", customer.address.as_deref()),
        validate_optional_text("contact", customer.contact.as_deref()),
        validate_store_count(customer.number_of_stores),
    ];
    checks.extend(
        costs
            .fields()
            .into_iter()
            .map(|(field, amount)| validate_cost_amount(field, amount)),
    );

    let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidQuote(errors))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

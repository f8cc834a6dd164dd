//! # quote-core: Pure Business Logic for BenKon Quotes
//!
//! This crate is the **heart** of the quoting tool. It turns customer and
//! cost inputs into a two-year comparison of buying the hardware/software
//! bundle outright versus renting it, with a month-by-month cash flow.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BenKon Quote Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Form / CLI (apps/quote-cli)                        │   │
//! │  │    collects CustomerInfo + CostComponents, validates            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │calculation │  │ validation │  │  format  │  │   │
//! │  │   │  Money    │  │ Purchase   │  │ form rules │  │ VND/date │  │   │
//! │  │   │  Customer │  │ Rental     │  │            │  │          │  │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CalculationResult                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          quote-export (tables, charts, HTML quotation)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CustomerInfo, CostComponents, plans, FormState)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`calculation`] - The purchase vs rental engine
//! - [`validation`] - Form rules, checked before calculating
//! - [`format`] - Currency / date rendering per locale
//! - [`store`] - Form-state repository seam
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::{compute_comparison, CostComponents, CustomerInfo};
//!
//! let customer = CustomerInfo::new("Cafe Sài Gòn", 3);
//! let result = compute_comparison(&customer, &CostComponents::default());
//!
//! assert_eq!(result.purchase.month0_cost.dong(), 19_900_000);
//! assert_eq!(result.purchase.cash_flow.len(), 25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculation;
pub mod error;
pub mod format;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculation::{compute_comparison, DEPOSIT_MONTHS, HORIZON_MONTHS, SOFTWARE_RENEWAL_MONTH};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{FormStateRepository, MemoryFormStore};
pub use types::*;

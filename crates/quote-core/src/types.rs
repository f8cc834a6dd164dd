//! # Domain Types
//!
//! Value objects exchanged between the quote form, the calculation engine and
//! the presentation layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Inputs (owned by the form)          Output (disposable, per request)   │
//! │  ┌─────────────────┐                 ┌──────────────────────────────┐   │
//! │  │  CustomerInfo   │                 │      CalculationResult       │   │
//! │  │  customer_name  │                 │  ┌────────────────────────┐  │   │
//! │  │  company_name?  │                 │  │ PurchaseOption         │  │   │
//! │  │  address?       │──┐              │  │  month0 / month13      │  │   │
//! │  │  contact?       │  │              │  │  cash_flow[0..=24]     │  │   │
//! │  │  number_of_stores│ │  compute_    │  └────────────────────────┘  │   │
//! │  └─────────────────┘  ├─ comparison ►│  ┌────────────────────────┐  │   │
//! │  ┌─────────────────┐  │              │  │ RentalOption           │  │   │
//! │  │ CostComponents  │──┘              │  │  monthly / deposit     │  │   │
//! │  │  4 × Money      │                 │  │  cash_flow[0..=24]     │  │   │
//! │  └─────────────────┘                 │  └────────────────────────┘  │   │
//! │                                      └──────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type serializes with camelCase keys so JSON matches the form payload
//! the frontend already produces (`customerName`, `month0Cost`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Locale
// =============================================================================

/// Display language of the quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese (default).
    #[default]
    Vi,
    /// English.
    En,
}

impl Locale {
    /// Short language code (`"vi"` / `"en"`).
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            _ => Err(ValidationError::NotAllowed {
                field: "language".to_string(),
                allowed: vec!["vi".to_string(), "en".to_string()],
            }),
        }
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Who the quote is for.
///
/// `number_of_stores` is signed on purpose: the engine multiplies whatever it
/// is given, and rejecting values below one is the form's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Required, non-empty after trimming.
    pub customer_name: String,

    #[serde(default)]
    pub company_name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Free-text phone / email.
    #[serde(default)]
    pub contact: Option<String>,

    pub number_of_stores: i64,
}

impl CustomerInfo {
    /// Creates customer info with only the required fields set.
    pub fn new(customer_name: impl Into<String>, number_of_stores: i64) -> Self {
        CustomerInfo {
            customer_name: customer_name.into(),
            company_name: None,
            address: None,
            contact: None,
            number_of_stores,
        }
    }
}

impl Default for CustomerInfo {
    /// Blank customer with a single store, as the form starts out.
    fn default() -> Self {
        CustomerInfo::new("", 1)
    }
}

/// The four cost inputs of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostComponents {
    /// One-off hardware bundle price.
    pub hardware_cost: Money,

    /// Software licence, billed yearly.
    pub software_cost_per_year: Money,

    pub installation_cost_per_store: Money,

    pub setup_service_per_store: Money,
}

impl CostComponents {
    /// Field name / value pairs, in form order.
    pub fn fields(&self) -> [(&'static str, Money); 4] {
        [
            ("hardwareCost", self.hardware_cost),
            ("softwareCostPerYear", self.software_cost_per_year),
            ("installationCostPerStore", self.installation_cost_per_store),
            ("setupServicePerStore", self.setup_service_per_store),
        ]
    }
}

impl Default for CostComponents {
    /// Standard BenKon price list pre-filled in the quote form.
    fn default() -> Self {
        CostComponents {
            hardware_cost: Money::from_dong(6_500_000),
            software_cost_per_year: Money::from_dong(5_000_000),
            installation_cost_per_store: Money::from_dong(1_600_000),
            setup_service_per_store: Money::from_dong(1_200_000),
        }
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// One row of a cash-flow schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    /// 0 is "now", 24 is the last month of the contract.
    pub month: u32,

    /// Payment due in this month.
    pub amount: Money,

    /// Running sum of `amount` from month 0 through this month.
    pub cumulative_amount: Money,
}

/// Outright purchase: everything up front, software renewal in month 13.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOption {
    pub month0_cost: Money,
    pub month13_cost: Money,
    pub total_two_year_cost: Money,
    pub cash_flow: Vec<MonthlyPayment>,
}

/// Two-year rental contract.
///
/// ## Deposit Accounting
/// The deposit is paid at month 0 and shows up in `cash_flow`, but it is
/// refundable and therefore NOT part of `total_two_year_cost`. Summing the
/// schedule gives `total_two_year_cost + deposit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalOption {
    pub monthly_rental: Money,
    pub deposit: Money,
    pub total_two_year_cost: Money,
    pub cash_flow: Vec<MonthlyPayment>,
}

/// Both plans side by side. Created fresh for every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    pub purchase: PurchaseOption,
    pub rental: RentalOption,
}

/// Which payment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Purchase,
    Rental,
}

/// Headline comparison of the two plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Absolute gap between the two headline totals.
    pub difference: Money,

    /// `difference` relative to the rental total, in basis points.
    /// `None` when the rental total is zero, or when the ratio does not fit
    /// in a `u32` (only reachable with saturated or negative inputs).
    pub difference_bps: Option<u32>,

    /// Plan with the lower headline total (purchase wins ties).
    pub best_option: PlanKind,
}

// =============================================================================
// Form State
// =============================================================================

/// Everything the quote form keeps between edits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub customer: CustomerInfo,
    pub costs: CostComponents,
    #[serde(default)]
    pub language: Locale,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("vi".parse::<Locale>().unwrap(), Locale::Vi);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Vi);
    }

    #[test]
    fn test_default_form_state_matches_price_list() {
        let state = FormState::default();
        assert_eq!(state.customer.number_of_stores, 1);
        assert!(state.customer.customer_name.is_empty());
        assert_eq!(state.costs.hardware_cost.dong(), 6_500_000);
        assert_eq!(state.costs.software_cost_per_year.dong(), 5_000_000);
        assert_eq!(state.costs.installation_cost_per_store.dong(), 1_600_000);
        assert_eq!(state.costs.setup_service_per_store.dong(), 1_200_000);
        assert_eq!(state.language, Locale::Vi);
    }

    #[test]
    fn test_form_state_json_uses_camel_case() {
        let json = serde_json::to_value(FormState::default()).unwrap();
        assert_eq!(json["customer"]["numberOfStores"], 1);
        assert_eq!(json["costs"]["hardwareCost"], 6_500_000);
        assert_eq!(json["costs"]["setupServicePerStore"], 1_200_000);
        assert_eq!(json["language"], "vi");
    }

    #[test]
    fn test_customer_optional_fields_default_when_missing() {
        let customer: CustomerInfo =
            serde_json::from_str(r#"{"customerName":"Cafe Sài Gòn","numberOfStores":2}"#)
                .unwrap();
        assert_eq!(customer.customer_name, "Cafe Sài Gòn");
        assert_eq!(customer.company_name, None);
        assert_eq!(customer.number_of_stores, 2);
    }

    #[test]
    fn test_cost_fields_in_form_order() {
        let names: Vec<_> = CostComponents::default()
            .fields()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            vec![
                "hardwareCost",
                "softwareCostPerYear",
                "installationCostPerStore",
                "setupServicePerStore"
            ]
        );
    }
}

//! # Calculation Engine
//!
//! Turns customer and cost inputs into a two-year comparison of buying the
//! bundle outright versus renting it.
//!
//! ## Timeline
//! ```text
//! month:     0    1    2   ...   12   13   14  ...   24
//!            │                        │                │
//! Purchase:  ████ (hardware + install + setup + year 1 software)
//!                                     ██ (year 2 software)
//! Rental:    ▓▓▓ deposit (3 × rent, refundable)
//!                 ▒    ▒   ...   ▒    ▒    ▒   ...   ▒   monthly rent
//! ```
//!
//! The horizon is fixed at 25 entries (month 0 plus 24 contract months).
//!
//! ## Purity
//! `compute_comparison` is deterministic and total: any numeric input,
//! including zero or negative costs and store counts, produces a result.
//! Rejecting such inputs is the form's job (see [`crate::validation`]).

use tracing::debug;

use crate::money::Money;
use crate::types::{
    CalculationResult, ComparisonSummary, CostComponents, CustomerInfo, MonthlyPayment, PlanKind,
    PurchaseOption, RentalOption,
};

// =============================================================================
// Constants
// =============================================================================

/// Contract length in months. Schedules hold `HORIZON_MONTHS + 1` entries.
pub const HORIZON_MONTHS: u32 = 24;

/// Month in which the second year of software is billed on the purchase plan.
pub const SOFTWARE_RENEWAL_MONTH: u32 = 13;

/// Months of rent held as a refundable deposit.
pub const DEPOSIT_MONTHS: i64 = 3;

/// Rental markup over the two-year base cost, as a ratio (120 / 100).
const RENTAL_MARKUP_NUMERATOR: i64 = 120;
const RENTAL_MARKUP_DENOMINATOR: i64 = 100;

// =============================================================================
// Engine
// =============================================================================

/// Computes both payment plans for a quote.
///
/// ## Algorithm
/// ```text
/// installation = installation_per_store × stores
/// setup        = setup_per_store × stores
///
/// Purchase
///   month0  = hardware + installation + setup + software/yr
///   month13 = software/yr
///   total   = month0 + month13
///
/// Rental
///   base    = hardware + installation + setup + 2 × software/yr
///   monthly = round(base × 1.2 / 24)        ← the only rounding step
///   deposit = monthly × 3
///   total   = monthly × 24                  ← deposit excluded
/// ```
///
/// ## Example
/// ```rust
/// use quote_core::{compute_comparison, CostComponents, CustomerInfo};
///
/// let customer = CustomerInfo::new("Cafe Sài Gòn", 1);
/// let result = compute_comparison(&customer, &CostComponents::default());
///
/// assert_eq!(result.purchase.month0_cost.dong(), 14_300_000);
/// assert_eq!(result.purchase.total_two_year_cost.dong(), 19_300_000);
/// assert_eq!(result.rental.monthly_rental.dong(), 965_000);
/// assert_eq!(result.rental.deposit.dong(), 2_895_000);
/// assert_eq!(result.rental.total_two_year_cost.dong(), 23_160_000);
/// ```
pub fn compute_comparison(customer: &CustomerInfo, costs: &CostComponents) -> CalculationResult {
    let stores = customer.number_of_stores;
    let total_installation = costs.installation_cost_per_store * stores;
    let total_setup = costs.setup_service_per_store * stores;
    let yearly_service = costs.software_cost_per_year;
    let one_time = costs.hardware_cost + total_installation + total_setup;

    let purchase = purchase_option(one_time, yearly_service);
    let rental = rental_option(one_time + yearly_service * 2);

    debug!(
        stores,
        month0 = purchase.month0_cost.dong(),
        month13 = purchase.month13_cost.dong(),
        monthly_rental = rental.monthly_rental.dong(),
        deposit = rental.deposit.dong(),
        "Computed quote comparison"
    );

    CalculationResult { purchase, rental }
}

fn purchase_option(one_time: Money, yearly_service: Money) -> PurchaseOption {
    let month0_cost = one_time + yearly_service;
    let month13_cost = yearly_service;

    let cash_flow = build_schedule(|month| match month {
        0 => month0_cost,
        SOFTWARE_RENEWAL_MONTH => month13_cost,
        _ => Money::zero(),
    });

    PurchaseOption {
        month0_cost,
        month13_cost,
        total_two_year_cost: month0_cost + month13_cost,
        cash_flow,
    }
}

fn rental_option(two_year_base: Money) -> RentalOption {
    let monthly_rental = two_year_base.scale_rounded(
        RENTAL_MARKUP_NUMERATOR,
        RENTAL_MARKUP_DENOMINATOR * HORIZON_MONTHS as i64,
    );
    // Derived from the rounded rent so the schedule and totals agree.
    let deposit = monthly_rental * DEPOSIT_MONTHS;

    let cash_flow = build_schedule(|month| {
        if month == 0 {
            deposit
        } else {
            monthly_rental
        }
    });

    RentalOption {
        monthly_rental,
        deposit,
        total_two_year_cost: monthly_rental * HORIZON_MONTHS as i64,
        cash_flow,
    }
}

/// Builds the 25-entry schedule for months `0..=HORIZON_MONTHS`, accumulating
/// the running total in month order.
fn build_schedule(amount_for: impl Fn(u32) -> Money) -> Vec<MonthlyPayment> {
    let mut cumulative = Money::zero();

    (0..=HORIZON_MONTHS)
        .map(|month| {
            let amount = amount_for(month);
            cumulative += amount;
            MonthlyPayment {
                month,
                amount,
                cumulative_amount: cumulative,
            }
        })
        .collect()
}

// =============================================================================
// Summary
// =============================================================================

impl CalculationResult {
    /// Compares the headline two-year totals of both plans.
    ///
    /// The rental deposit is refundable and is left out, the same way it is
    /// left out of `RentalOption::total_two_year_cost`.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::{compute_comparison, CostComponents, CustomerInfo, PlanKind};
    ///
    /// let result = compute_comparison(&CustomerInfo::new("A", 1), &CostComponents::default());
    /// let summary = result.summary();
    ///
    /// assert_eq!(summary.best_option, PlanKind::Purchase);
    /// assert_eq!(summary.difference.dong(), 3_860_000);
    /// ```
    pub fn summary(&self) -> ComparisonSummary {
        let purchase_total = self.purchase.total_two_year_cost;
        let rental_total = self.rental.total_two_year_cost;
        let difference = (purchase_total - rental_total).abs();

        let difference_bps = if rental_total.is_zero() {
            None
        } else {
            let bps = difference.scale_rounded(10_000, rental_total.abs().dong());
            u32::try_from(bps.dong()).ok()
        };

        let best_option = if purchase_total <= rental_total {
            PlanKind::Purchase
        } else {
            PlanKind::Rental
        };

        ComparisonSummary {
            difference,
            difference_bps,
            best_option,
        }
    }

    /// Payment schedule of one plan.
    pub fn cash_flow(&self, plan: PlanKind) -> &[MonthlyPayment] {
        match plan {
            PlanKind::Purchase => &self.purchase.cash_flow,
            PlanKind::Rental => &self.rental.cash_flow,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

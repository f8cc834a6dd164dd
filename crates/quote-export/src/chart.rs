//! # Chart Series
//!
//! Data for the two cash-flow charts. The frontend plots these directly;
//! no transformation beyond picking a column of the schedule is needed.
//!
//! ```text
//! SeriesKind::Amount      → bar chart   (what is paid each month)
//! SeriesKind::Cumulative  → line chart  (running total, milestones at 0/13/24)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quote_core::{
    CalculationResult, Locale, MonthlyPayment, HORIZON_MONTHS, SOFTWARE_RENEWAL_MONTH,
};

use crate::i18n::{text, MessageKey};

/// Which column of the schedule to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Amount,
    Cumulative,
}

/// Month-indexed values for both plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub kind: SeriesKind,
    /// `"0"` through `"24"`.
    pub labels: Vec<String>,
    pub purchase: Vec<i64>,
    pub rental: Vec<i64>,
}

impl ChartSeries {
    /// Extracts one series pair from a calculation result.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::{compute_comparison, CostComponents, CustomerInfo};
    /// use quote_export::chart::{ChartSeries, SeriesKind};
    ///
    /// let result = compute_comparison(&CustomerInfo::new("A", 1), &CostComponents::default());
    /// let series = ChartSeries::from_result(&result, SeriesKind::Cumulative);
    ///
    /// assert_eq!(series.labels.len(), 25);
    /// assert_eq!(series.purchase[24], 19_300_000);
    /// ```
    pub fn from_result(result: &CalculationResult, kind: SeriesKind) -> Self {
        let pick = |schedule: &[MonthlyPayment]| -> Vec<i64> {
            schedule
                .iter()
                .map(|entry| match kind {
                    SeriesKind::Amount => entry.amount.dong(),
                    SeriesKind::Cumulative => entry.cumulative_amount.dong(),
                })
                .collect()
        };

        ChartSeries {
            kind,
            labels: (0..=HORIZON_MONTHS).map(|m| m.to_string()).collect(),
            purchase: pick(&result.purchase.cash_flow),
            rental: pick(&result.rental.cash_flow),
        }
    }
}

/// Months annotated on the cumulative chart.
pub fn milestone_months() -> [u32; 3] {
    [0, SOFTWARE_RENEWAL_MONTH, HORIZON_MONTHS]
}

/// Tooltip annotation for a milestone month, if it is one.
pub fn milestone_label(month: u32, locale: Locale) -> Option<&'static str> {
    let key = match month {
        0 => MessageKey::MilestoneInitialPayment,
        SOFTWARE_RENEWAL_MONTH => MessageKey::MilestoneYearTwo,
        HORIZON_MONTHS => MessageKey::MilestoneContractEnd,
        _ => return None,
    };
    Some(text(key, locale))
}

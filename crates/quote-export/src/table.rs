//! # Cash-Flow Table
//!
//! Month-by-month rows pairing both plans, as shown under the charts and in
//! the exported quotation.
//!
//! ```text
//! Month    | Direct Purchase            | Contract Rental
//!          |       Amount |  Cumulative |     Amount |  Cumulative
//! ---------+--------------+-------------+------------+------------
//! Now *    |  ₫14,300,000 | ₫14,300,000 | ₫2,895,000 |  ₫2,895,000
//! 1        |            - | ₫14,300,000 |   ₫965,000 |  ₫3,860,000
//! ```
//!
//! Rows marked `*` are milestones (months 0, 13 and 24).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quote_core::format::format_currency;
use quote_core::{CalculationResult, Locale, Money, MonthlyPayment, PlanKind};

use crate::chart::milestone_months;
use crate::i18n::{plan_name, text, MessageKey};

/// How many months to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableView {
    /// Months 0 through 12.
    #[default]
    Compact,
    /// Months 0 through 24.
    Full,
}

impl TableView {
    pub const fn row_count(&self) -> usize {
        match self {
            TableView::Compact => 13,
            TableView::Full => 25,
        }
    }
}

/// One month of both schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRow {
    pub month: u32,
    pub purchase: MonthlyPayment,
    pub rental: MonthlyPayment,
    pub milestone: bool,
}

/// Rows plus the headline totals for the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowTable {
    pub view: TableView,
    pub rows: Vec<CashFlowRow>,
    pub purchase_total: Money,
    /// Excludes the refundable deposit.
    pub rental_total: Money,
}

impl CashFlowTable {
    /// Builds the table for the requested view.
    pub fn build(result: &CalculationResult, view: TableView) -> Self {
        let milestones = milestone_months();

        let rows = result
            .cash_flow(PlanKind::Purchase)
            .iter()
            .zip(result.cash_flow(PlanKind::Rental))
            .take(view.row_count())
            .map(|(purchase, rental)| CashFlowRow {
                month: purchase.month,
                purchase: *purchase,
                rental: *rental,
                milestone: milestones.contains(&purchase.month),
            })
            .collect();

        CashFlowTable {
            view,
            rows,
            purchase_total: result.purchase.total_two_year_cost,
            rental_total: result.rental.total_two_year_cost,
        }
    }

    /// Renders an aligned plain-text table for terminals.
    pub fn render_text(&self, locale: Locale) -> String {
        let header = [
            text(MessageKey::Month, locale).to_string(),
            text(MessageKey::Amount, locale).to_string(),
            text(MessageKey::Cumulative, locale).to_string(),
            text(MessageKey::Amount, locale).to_string(),
            text(MessageKey::Cumulative, locale).to_string(),
        ];

        let body: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|row| {
                let mut label = month_label(row.month, locale);
                if row.milestone {
                    label.push_str(" *");
                }
                [
                    label,
                    amount_cell(row.purchase.amount, locale),
                    format_currency(row.purchase.cumulative_amount, locale),
                    amount_cell(row.rental.amount, locale),
                    format_currency(row.rental.cumulative_amount, locale),
                ]
            })
            .collect();

        let footer = [
            text(MessageKey::Total, locale).to_string(),
            String::new(),
            format_currency(self.purchase_total, locale),
            String::new(),
            format_currency(self.rental_total, locale),
        ];

        let mut widths = [0usize; 5];
        for cells in std::iter::once(&header).chain(&body).chain(std::iter::once(&footer)) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let purchase_span = widths[1] + widths[2] + 3;
        let rental_span = widths[3] + widths[4] + 3;

        let mut out = String::new();
        out.push_str(&format!(
            "{:<w0$} | {:<ps$} | {:<rs$}\n",
            "",
            plan_name(PlanKind::Purchase, locale),
            plan_name(PlanKind::Rental, locale),
            w0 = widths[0],
            ps = purchase_span,
            rs = rental_span,
        ));
        out.push_str(&format_line(&header, &widths));
        out.push_str(&separator(&widths));
        for cells in &body {
            out.push_str(&format_line(cells, &widths));
        }
        out.push_str(&separator(&widths));
        out.push_str(&format_line(&footer, &widths));
        out.push_str(text(MessageKey::DepositNote, locale));
        out.push('\n');

        out
    }
}

/// `Now` for month 0, the month number otherwise.
pub fn month_label(month: u32, locale: Locale) -> String {
    if month == 0 {
        text(MessageKey::Now, locale).to_string()
    } else {
        month.to_string()
    }
}

/// Currency cell where nothing is due shows `-`.
pub fn amount_cell(amount: Money, locale: Locale) -> String {
    if amount.is_zero() {
        "-".to_string()
    } else {
        format_currency(amount, locale)
    }
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    format!(
        "{:<w0$} | {:>w1$} | {:>w2$} | {:>w3$} | {:>w4$}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )
}

fn separator(widths: &[usize; 5]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    let line = dashes.join("+");
    // Rows carry no space before the first cell or after the last
    format!("{}\n", &line[1..line.len() - 1])
}

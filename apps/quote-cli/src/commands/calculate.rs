//! # Calculate Command
//!
//! Prints the comparison either as a terminal report or as JSON for other
//! tools to consume.

use serde::Serialize;

use quote_core::format::{format_currency, format_percent_bps};
use quote_core::{CalculationResult, ComparisonSummary, FormState, FormStateRepository, Locale};
use quote_export::i18n::{plan_name, text, MessageKey};
use quote_export::{CashFlowTable, TableView};

use crate::cli::{FormArgs, OutputFormat};
use crate::config::QuoteConfig;
use crate::error::CliError;

/// `--format json` payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateOutput<'a> {
    pub form: &'a FormState,
    pub result: &'a CalculationResult,
    pub summary: ComparisonSummary,
}

/// Runs the calculation and returns the text to print.
pub fn execute(
    store: &dyn FormStateRepository,
    config: &QuoteConfig,
    args: &FormArgs,
    format: OutputFormat,
    full: bool,
) -> Result<String, CliError> {
    let (form, result) = super::prepare(store, config, args)?;
    let summary = result.summary();

    match format {
        OutputFormat::Json => {
            let output = CalculateOutput {
                form: &form,
                result: &result,
                summary,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Table => {
            let view = if full { TableView::Full } else { TableView::Compact };
            Ok(render_report(&result, &summary, view, form.language))
        }
    }
}

fn render_report(
    result: &CalculationResult,
    summary: &ComparisonSummary,
    view: TableView,
    locale: Locale,
) -> String {
    let t = |key| text(key, locale);
    let money = |amount| format_currency(amount, locale);
    let purchase = &result.purchase;
    let rental = &result.rental;

    let mut out = String::new();

    out.push_str(&format!("{}\n", t(MessageKey::PurchasePlanTitle)));
    out.push_str(&format!("  {}: {}\n", t(MessageKey::InitialPayment), money(purchase.month0_cost)));
    out.push_str(&format!("  {}: {}\n", t(MessageKey::YearTwo), money(purchase.month13_cost)));
    out.push_str(&format!("  {}: {}\n\n", t(MessageKey::Total), money(purchase.total_two_year_cost)));

    out.push_str(&format!("{}\n", t(MessageKey::RentalPlanTitle)));
    out.push_str(&format!("  {}: {}\n", t(MessageKey::DepositRefundable), money(rental.deposit)));
    out.push_str(&format!("  {}: {}\n", t(MessageKey::Monthly), money(rental.monthly_rental)));
    out.push_str(&format!(
        "  {}: {} {}\n\n",
        t(MessageKey::Total),
        money(rental.total_two_year_cost),
        t(MessageKey::ExclDeposit)
    ));

    out.push_str(&format!(
        "{}: {}\n",
        t(MessageKey::BestOption),
        plan_name(summary.best_option, locale)
    ));
    let difference = match summary.difference_bps {
        Some(bps) => format!("{} ({})", money(summary.difference), format_percent_bps(bps)),
        None => money(summary.difference),
    };
    out.push_str(&format!("{}: {}\n\n", t(MessageKey::Difference), difference));

    out.push_str(&CashFlowTable::build(result, view).render_text(locale));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::MemoryFormStore;

    fn args(lang: Locale) -> FormArgs {
        FormArgs {
            customer_name: Some("Cafe".to_string()),
            stores: Some(1),
            lang: Some(lang),
            ..FormArgs::default()
        }
    }

    #[test]
    fn test_table_report_english() {
        let store = MemoryFormStore::new();
        let out = execute(&store, &QuoteConfig::default(), &args(Locale::En), OutputFormat::Table, false)
            .unwrap();

        assert!(out.contains("Initial Payment: ₫14,300,000"));
        assert!(out.contains("Monthly: ₫965,000"));
        assert!(out.contains("Best Option: Direct Purchase"));
        assert!(out.contains("Difference: ₫3,860,000 (16.7%)"));
        assert!(out.contains("Now *"));
        assert!(!out.contains("13 *"));
    }

    #[test]
    fn test_full_table_includes_contract_end() {
        let store = MemoryFormStore::new();
        let out = execute(&store, &QuoteConfig::default(), &args(Locale::Vi), OutputFormat::Table, true)
            .unwrap();

        assert!(out.contains("Hiện tại *"));
        assert!(out.contains("24 *"));
        assert!(out.contains("Phương án tốt nhất: Mua trả thẳng"));
    }

    #[test]
    fn test_json_output() {
        let store = MemoryFormStore::new();
        let out = execute(&store, &QuoteConfig::default(), &args(Locale::En), OutputFormat::Json, false)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["result"]["purchase"]["month0Cost"], 14_300_000);
        assert_eq!(json["result"]["rental"]["deposit"], 2_895_000);
        assert_eq!(json["summary"]["bestOption"], "purchase");
        assert_eq!(json["summary"]["differenceBps"], 1667);
        assert_eq!(json["form"]["customer"]["customerName"], "Cafe");
    }
}

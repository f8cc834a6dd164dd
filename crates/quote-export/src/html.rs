//! # Printable Quotation (HTML)
//!
//! Renders a `QuoteDocument` as a single self-contained HTML page, laid out
//! for A4 printing. Chart images are inlined as data URLs.
//!
//! ## Page Layout
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ BenKon · tagline                 QUOTATION   │
//! │ Quote Number · Date · Valid Until            │
//! ├──────────────────────────────────────────────┤
//! │ CUSTOMER INFORMATION                         │
//! │ COST BREAKDOWN                               │
//! │ PAYMENT METHOD COMPARISON  [purchase][rental]│
//! │ 24-MONTH CASH FLOW SUMMARY                   │
//! │ DETAILED 24-MONTH CASH FLOW (25 rows)        │
//! │ charts (optional)                            │
//! │ TERMS & CONDITIONS                           │
//! ├──────────────────────────────────────────────┤
//! │ company · website · email                    │
//! └──────────────────────────────────────────────┘
//! ```

use quote_core::format::{format_currency, format_date, format_number, format_percent_bps};
use quote_core::{Locale, Money, PlanKind};

use crate::document::{Branding, QuoteDocument};
use crate::i18n::{plan_name, terms, text, MessageKey};
use crate::images::{ChartImage, ChartImages};
use crate::table::{amount_cell, month_label, CashFlowTable, TableView};

const STYLE: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; color: #1f2937; margin: 0; }
.page { max-width: 190mm; margin: 0 auto; padding: 10mm; }
header { display: flex; justify-content: space-between; border-bottom: 3px solid #16a34a; padding-bottom: 6px; }
header .brand { font-size: 22px; font-weight: bold; color: #16a34a; }
header .tagline { font-size: 11px; color: #6b7280; }
h1 { text-align: center; letter-spacing: 2px; }
h2 { font-size: 13px; background: #f3f4f6; padding: 4px 6px; }
table { width: 100%; border-collapse: collapse; font-size: 11px; }
td, th { padding: 3px 6px; border-bottom: 1px solid #e5e7eb; }
td.num, th.num { text-align: right; }
tr.milestone td { background: #fef9c3; font-weight: bold; }
tfoot td { font-weight: bold; border-top: 2px solid #1f2937; }
.plans { display: flex; gap: 12px; }
.plan { flex: 1; border: 1px solid #d1d5db; border-radius: 6px; padding: 8px; }
.plan.best { border-color: #16a34a; }
.note { font-size: 10px; color: #6b7280; }
.chart img { width: 100%; }
footer { margin-top: 16px; border-top: 1px solid #d1d5db; font-size: 10px; text-align: center; color: #6b7280; }
"#;

/// Renders the full quotation page.
pub fn render_quote_html(doc: &QuoteDocument, branding: &Branding, charts: &ChartImages) -> String {
    let locale = doc.locale;
    let t = |key| text(key, locale);

    let mut html = String::with_capacity(16 * 1024);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} {}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"page\">\n",
        locale.code(),
        t(MessageKey::QuotationTitle),
        escape(doc.number.as_str()),
        STYLE
    ));

    // Header
    html.push_str(&format!(
        "<header><div><div class=\"brand\">{}</div><div class=\"tagline\">{}</div></div><div>{}</div></header>\n",
        escape(&branding.company),
        escape(&branding.tagline),
        escape(&branding.website)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", t(MessageKey::QuotationTitle)));
    html.push_str("<table class=\"meta\">\n");
    push_field(&mut html, t(MessageKey::QuoteNumber), &escape(doc.number.as_str()));
    push_field(&mut html, t(MessageKey::Date), &format_date(doc.issued_on, locale));
    push_field(&mut html, t(MessageKey::ValidUntil), &format_date(doc.valid_until, locale));
    html.push_str("</table>\n");

    push_customer(&mut html, doc);
    push_costs(&mut html, doc);
    push_comparison(&mut html, doc);
    push_summary(&mut html, doc);
    push_cash_flow(&mut html, doc);
    push_chart(&mut html, t(MessageKey::PaymentChartSection), charts.payment.as_ref());
    push_chart(&mut html, t(MessageKey::CumulativeChartSection), charts.cumulative.as_ref());

    // Terms
    html.push_str(&format!("<h2>{}</h2>\n<ul class=\"terms\">\n", t(MessageKey::TermsSection)));
    for term in terms(locale, doc.validity_days) {
        html.push_str(&format!("<li>{}</li>\n", escape(&term)));
    }
    html.push_str("</ul>\n");

    html.push_str(&format!(
        "<footer>{} · {} · {}</footer>\n</div>\n</body>\n</html>\n",
        escape(&branding.company),
        escape(&branding.website),
        escape(&branding.email)
    ));

    html
}

/// Escapes text for HTML element content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Sections
// =============================================================================

fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<tr><th>{}</th><td>{}</td></tr>\n", label, value));
}

fn push_customer(html: &mut String, doc: &QuoteDocument) {
    let locale = doc.locale;
    let customer = &doc.customer;

    html.push_str(&format!("<h2>{}</h2>\n<table>\n", text(MessageKey::CustomerSection, locale)));
    push_field(html, text(MessageKey::CustomerName, locale), &escape(&customer.customer_name));

    let optional = [
        (MessageKey::Company, &customer.company_name),
        (MessageKey::Address, &customer.address),
        (MessageKey::Contact, &customer.contact),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            push_field(html, text(key, locale), &escape(value));
        }
    }

    push_field(
        html,
        text(MessageKey::NumberOfStores, locale),
        &format_number(customer.number_of_stores, locale),
    );
    html.push_str("</table>\n");
}

fn push_costs(html: &mut String, doc: &QuoteDocument) {
    let locale = doc.locale;
    let costs = &doc.costs;

    html.push_str(&format!("<h2>{}</h2>\n<table>\n", text(MessageKey::CostSection, locale)));
    let rows = [
        (MessageKey::HardwareCost, costs.hardware_cost),
        (MessageKey::SoftwareCostPerYear, costs.software_cost_per_year),
        (MessageKey::InstallationPerStore, costs.installation_cost_per_store),
        (MessageKey::SetupPerStore, costs.setup_service_per_store),
    ];
    for (key, amount) in rows {
        html.push_str(&format!(
            "<tr><th>{}</th><td class=\"num\">{}</td></tr>\n",
            text(key, locale),
            format_currency(amount, locale)
        ));
    }
    html.push_str("</table>\n");
}

fn push_comparison(html: &mut String, doc: &QuoteDocument) {
    let locale = doc.locale;
    let t = |key| text(key, locale);
    let purchase = &doc.result.purchase;
    let rental = &doc.result.rental;
    let best = doc.result.summary().best_option;

    html.push_str(&format!("<h2>{}</h2>\n<div class=\"plans\">\n", t(MessageKey::ComparisonSection)));

    push_plan_box(
        html,
        t(MessageKey::PurchasePlanTitle),
        best == PlanKind::Purchase,
        &[
            (t(MessageKey::InitialPayment), purchase.month0_cost),
            (t(MessageKey::YearTwo), purchase.month13_cost),
            (t(MessageKey::Total), purchase.total_two_year_cost),
        ],
        None,
        locale,
    );
    push_plan_box(
        html,
        t(MessageKey::RentalPlanTitle),
        best == PlanKind::Rental,
        &[
            (t(MessageKey::DepositRefundable), rental.deposit),
            (t(MessageKey::Monthly), rental.monthly_rental),
            (t(MessageKey::Total), rental.total_two_year_cost),
        ],
        Some(t(MessageKey::ExclDeposit)),
        locale,
    );

    html.push_str("</div>\n");
}

fn push_plan_box(
    html: &mut String,
    title: &str,
    best: bool,
    lines: &[(&str, Money)],
    note: Option<&str>,
    locale: Locale,
) {
    let class = if best { "plan best" } else { "plan" };
    html.push_str(&format!("<div class=\"{}\">\n<h3>{}</h3>\n<table>\n", class, title));
    for (label, amount) in lines {
        html.push_str(&format!(
            "<tr><th>{}</th><td class=\"num\">{}</td></tr>\n",
            label,
            format_currency(*amount, locale)
        ));
    }
    html.push_str("</table>\n");
    if let Some(note) = note {
        html.push_str(&format!("<div class=\"note\">{}</div>\n", note));
    }
    html.push_str("</div>\n");
}

fn push_summary(html: &mut String, doc: &QuoteDocument) {
    let locale = doc.locale;
    let t = |key| text(key, locale);
    let summary = doc.result.summary();

    html.push_str(&format!("<h2>{}</h2>\n<table>\n", t(MessageKey::SummarySection)));
    push_field(
        html,
        plan_name(PlanKind::Purchase, locale),
        &format_currency(doc.result.purchase.total_two_year_cost, locale),
    );
    push_field(
        html,
        plan_name(PlanKind::Rental, locale),
        &format!(
            "{} {}",
            format_currency(doc.result.rental.total_two_year_cost, locale),
            t(MessageKey::ExclDeposit)
        ),
    );

    let difference = match summary.difference_bps {
        Some(bps) => format!(
            "{} ({})",
            format_currency(summary.difference, locale),
            format_percent_bps(bps)
        ),
        None => format_currency(summary.difference, locale),
    };
    push_field(html, t(MessageKey::Difference), &difference);
    push_field(html, t(MessageKey::BestOption), plan_name(summary.best_option, locale));
    html.push_str("</table>\n");
}

fn push_cash_flow(html: &mut String, doc: &QuoteDocument) {
    let locale = doc.locale;
    let t = |key| text(key, locale);
    let table = CashFlowTable::build(&doc.result, TableView::Full);

    html.push_str(&format!("<h2>{}</h2>\n<table class=\"cash-flow\">\n<thead>\n", t(MessageKey::CashFlowSection)));
    html.push_str(&format!(
        "<tr><th rowspan=\"2\">{}</th><th colspan=\"2\">{}</th><th colspan=\"2\">{}</th></tr>\n",
        t(MessageKey::Month),
        plan_name(PlanKind::Purchase, locale),
        plan_name(PlanKind::Rental, locale)
    ));
    html.push_str(&format!(
        "<tr><th class=\"num\">{a}</th><th class=\"num\">{c}</th><th class=\"num\">{a}</th><th class=\"num\">{c}</th></tr>\n</thead>\n<tbody>\n",
        a = t(MessageKey::Amount),
        c = t(MessageKey::Cumulative)
    ));

    for row in &table.rows {
        let class = if row.milestone { " class=\"milestone\"" } else { "" };
        html.push_str(&format!(
            "<tr{}><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            class,
            month_label(row.month, locale),
            amount_cell(row.purchase.amount, locale),
            format_currency(row.purchase.cumulative_amount, locale),
            amount_cell(row.rental.amount, locale),
            format_currency(row.rental.cumulative_amount, locale)
        ));
    }

    html.push_str(&format!(
        "</tbody>\n<tfoot><tr><td>{}</td><td></td><td class=\"num\">{}</td><td></td><td class=\"num\">{}</td></tr></tfoot>\n</table>\n",
        t(MessageKey::Total),
        format_currency(table.purchase_total, locale),
        format_currency(table.rental_total, locale)
    ));
    html.push_str(&format!("<p class=\"note\">{}</p>\n", t(MessageKey::DepositNote)));
}

fn push_chart(html: &mut String, title: &str, image: Option<&ChartImage>) {
    if let Some(image) = image {
        html.push_str(&format!(
            "<h2>{}</h2>\n<div class=\"chart\"><img src=\"{}\" alt=\"{}\"></div>\n",
            title,
            escape(image.data_url()),
            escape(title)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quote_core::{compute_comparison, CostComponents, CustomerInfo};

    fn document(customer: CustomerInfo, locale: Locale) -> QuoteDocument {
        let costs = CostComponents::default();
        let result = compute_comparison(&customer, &costs);
        let issued_on = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        QuoteDocument::issue(customer, costs, result, locale, issued_on, 30)
            .with_number("QT-20261018-042".parse().unwrap())
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Cafe Sài Gòn"), "Cafe Sài Gòn");
    }

    #[test]
    fn test_english_page_contents() {
        let doc = document(CustomerInfo::new("Cafe", 1), Locale::En);
        let html = render_quote_html(&doc, &Branding::default(), &ChartImages::none());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("QUOTATION"));
        assert!(html.contains("QT-20261018-042"));
        assert!(html.contains("October 18, 2026"));
        assert!(html.contains("November 17, 2026"));
        assert!(html.contains("₫14,300,000"));
        assert!(html.contains("₫23,160,000"));
        assert!(html.contains("(excl. deposit)"));
        assert!(html.contains("Quote valid for 30 days from issue date"));
        assert!(html.contains("support@benkon.io"));
    }

    #[test]
    fn test_vietnamese_page_contents() {
        let doc = document(CustomerInfo::new("Cafe", 1), Locale::Vi);
        let html = render_quote_html(&doc, &Branding::default(), &ChartImages::none());

        assert!(html.contains("<html lang=\"vi\">"));
        assert!(html.contains("BÁO GIÁ"));
        assert!(html.contains("18 tháng 10, 2026"));
        assert!(html.contains("14.300.000 VNĐ"));
        assert!(html.contains("Hiện tại"));
    }

    #[test]
    fn test_full_cash_flow_with_milestones() {
        let doc = document(CustomerInfo::new("Cafe", 1), Locale::En);
        let html = render_quote_html(&doc, &Branding::default(), &ChartImages::none());

        let rows = html.matches("<tr class=\"milestone\">").count();
        assert_eq!(rows, 3);
        assert!(html.contains("<td>24</td>"));
    }

    #[test]
    fn test_customer_text_is_escaped() {
        let mut customer = CustomerInfo::new("<script>alert(1)</script>", 1);
        customer.company_name = Some("A & B".to_string());
        let doc = document(customer, Locale::En);
        let html = render_quote_html(&doc, &Branding::default(), &ChartImages::none());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let mut customer = CustomerInfo::new("Cafe", 1);
        customer.address = Some("   ".to_string());
        let doc = document(customer, Locale::En);
        let html = render_quote_html(&doc, &Branding::default(), &ChartImages::none());

        assert!(!html.contains("<th>Company</th>"));
        assert!(!html.contains("<th>Address</th>"));
        assert!(html.contains("<th>Customer Name</th>"));
    }

    #[test]
    fn test_charts_embedded_only_when_present() {
        let doc = document(CustomerInfo::new("Cafe", 1), Locale::En);

        let without = render_quote_html(&doc, &Branding::default(), &ChartImages::none());
        assert!(!without.contains("<img"));

        let charts = ChartImages {
            payment: Some(ChartImage::from_bytes(b"png", "image/png").unwrap()),
            cumulative: None,
        };
        let with = render_quote_html(&doc, &Branding::default(), &charts);
        assert!(with.contains("MONTHLY PAYMENT CHART"));
        assert!(with.contains("src=\"data:image/png;base64,cG5n\""));
        assert!(!with.contains("CUMULATIVE CASH FLOW CHART"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let doc = document(CustomerInfo::new("Cafe", 3), Locale::En);
        let first = render_quote_html(&doc, &Branding::default(), &ChartImages::none());
        let second = render_quote_html(&doc, &Branding::default(), &ChartImages::none());
        assert_eq!(first, second);
    }
}

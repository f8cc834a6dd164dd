//! # Quote Document
//!
//! An issued quotation: the customer inputs, the computed comparison, and
//! the identity/validity metadata printed on the page.
//!
//! ## Dual-Key Identity Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  QuoteDocument                                                   │
//! │    id      : UUID v4            immutable, never shown           │
//! │    number  : QT-20261018-042    printed, quoted on the phone     │
//! │    issued_on ──(+ validity days)──► valid_until                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use quote_core::format::add_days;
use quote_core::{CalculationResult, CostComponents, CustomerInfo, Locale};

use crate::error::ExportError;

/// Days a quote stays valid unless configured otherwise.
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

// =============================================================================
// Quote Number
// =============================================================================

/// Human-readable quote number, `QT-YYYYMMDD-NNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteNumber(String);

impl QuoteNumber {
    /// Builds a quote number from the issue date and a 0–999 suffix.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use quote_export::document::QuoteNumber;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// assert_eq!(QuoteNumber::new(date, 42).as_str(), "QT-20261018-042");
    /// ```
    pub fn new(issued_on: NaiveDate, suffix: u16) -> Self {
        QuoteNumber(format!(
            "QT-{:04}{:02}{:02}-{:03}",
            issued_on.year(),
            issued_on.month(),
            issued_on.day(),
            suffix % 1000
        ))
    }

    /// Builds a quote number with a random suffix.
    pub fn generate<R: Rng + ?Sized>(issued_on: NaiveDate, rng: &mut R) -> Self {
        QuoteNumber::new(issued_on, rng.gen_range(0..1000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuoteNumber {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExportError::InvalidQuoteNumber(s.to_string());

        let rest = s.strip_prefix("QT-").ok_or_else(invalid)?;
        let (date_part, suffix_part) = rest.split_once('-').ok_or_else(invalid)?;

        if date_part.len() != 8 || suffix_part.len() != 3 {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|_| invalid())?;
        let suffix: u16 = suffix_part.parse().map_err(|_| invalid())?;

        Ok(QuoteNumber::new(date, suffix))
    }
}

// =============================================================================
// Branding
// =============================================================================

/// Company details printed in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub company: String,
    pub tagline: String,
    pub website: String,
    pub email: String,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            company: "BenKon".to_string(),
            tagline: "Energy Efficiency Solutions".to_string(),
            website: "www.benkon.io".to_string(),
            email: "support@benkon.io".to_string(),
        }
    }
}

// =============================================================================
// Quote Document
// =============================================================================

/// An issued quotation, ready to render.
///
/// The embedded `CalculationResult` is read-only here; exporting the same
/// document twice produces the same figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDocument {
    #[ts(as = "String")]
    pub id: Uuid,
    pub number: QuoteNumber,
    #[ts(as = "String")]
    pub issued_on: NaiveDate,
    #[ts(as = "String")]
    pub valid_until: NaiveDate,
    pub validity_days: i64,
    pub locale: Locale,
    pub customer: CustomerInfo,
    pub costs: CostComponents,
    pub result: CalculationResult,
}

impl QuoteDocument {
    /// Issues a new quote dated `issued_on` with a random quote number.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use quote_core::{compute_comparison, CostComponents, CustomerInfo, Locale};
    /// use quote_export::document::QuoteDocument;
    ///
    /// let customer = CustomerInfo::new("Cafe Sài Gòn", 1);
    /// let costs = CostComponents::default();
    /// let result = compute_comparison(&customer, &costs);
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    ///
    /// let doc = QuoteDocument::issue(customer, costs, result, Locale::Vi, today, 30);
    /// assert_eq!(doc.valid_until, NaiveDate::from_ymd_opt(2026, 11, 17).unwrap());
    /// assert!(doc.number.as_str().starts_with("QT-20261018-"));
    /// ```
    pub fn issue(
        customer: CustomerInfo,
        costs: CostComponents,
        result: CalculationResult,
        locale: Locale,
        issued_on: NaiveDate,
        validity_days: i64,
    ) -> Self {
        QuoteDocument {
            id: Uuid::new_v4(),
            number: QuoteNumber::generate(issued_on, &mut rand::thread_rng()),
            issued_on,
            valid_until: add_days(issued_on, validity_days),
            validity_days,
            locale,
            customer,
            costs,
            result,
        }
    }

    /// Replaces the generated quote number (reissuing under a known number).
    pub fn with_number(mut self, number: QuoteNumber) -> Self {
        self.number = number;
        self
    }

    /// Same quote rendered in another language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// File name for the exported document.
    ///
    /// Every character of the customer name that is not an ASCII letter or
    /// digit becomes `_`, e.g. `BenKon_Quote_Cafe_S_i_G_n_20261018.html`.
    pub fn file_name(&self) -> String {
        let safe_name: String = self
            .customer
            .customer_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        format!(
            "BenKon_Quote_{}_{}.html",
            safe_name,
            self.issued_on.format("%Y%m%d")
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::compute_comparison;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_document(name: &str) -> QuoteDocument {
        let customer = CustomerInfo::new(name, 2);
        let costs = CostComponents::default();
        let result = compute_comparison(&customer, &costs);
        QuoteDocument::issue(customer, costs, result, Locale::En, date(2026, 10, 18), 30)
    }

    #[test]
    fn test_quote_number_format() {
        assert_eq!(QuoteNumber::new(date(2026, 1, 5), 7).as_str(), "QT-20260105-007");
        assert_eq!(QuoteNumber::new(date(2026, 1, 5), 1999).as_str(), "QT-20260105-999");
    }

    #[test]
    fn test_quote_number_generate_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let number = QuoteNumber::generate(date(2026, 10, 18), &mut rng);
            let parsed: QuoteNumber = number.as_str().parse().unwrap();
            assert_eq!(parsed, number);
            assert_eq!(number.as_str().len(), "QT-20261018-000".len());
        }
    }

    #[test]
    fn test_quote_number_parse_rejects_garbage() {
        assert!("QT-20261018-04".parse::<QuoteNumber>().is_err());
        assert!("QX-20261018-042".parse::<QuoteNumber>().is_err());
        assert!("QT-20261399-042".parse::<QuoteNumber>().is_err());
        assert!("QT-20261018-0a2".parse::<QuoteNumber>().is_err());
        assert!("".parse::<QuoteNumber>().is_err());
    }

    #[test]
    fn test_issue_sets_validity_window() {
        let doc = sample_document("Cafe");
        assert_eq!(doc.issued_on, date(2026, 10, 18));
        assert_eq!(doc.valid_until, date(2026, 11, 17));
        assert_eq!(doc.validity_days, 30);
    }

    #[test]
    fn test_each_issue_gets_a_fresh_id() {
        assert_ne!(sample_document("A").id, sample_document("A").id);
    }

    #[test]
    fn test_file_name_sanitises_customer_name() {
        let doc = sample_document("Cafe Sài Gòn");
        assert_eq!(doc.file_name(), "BenKon_Quote_Cafe_S_i_G_n_20261018.html");
    }

    #[test]
    fn test_with_number_and_locale() {
        let number: QuoteNumber = "QT-20261018-123".parse().unwrap();
        let doc = sample_document("A")
            .with_number(number.clone())
            .with_locale(Locale::Vi);
        assert_eq!(doc.number, number);
        assert_eq!(doc.locale, Locale::Vi);
    }

    #[test]
    fn test_document_serializes_dates_as_iso() {
        let json = serde_json::to_value(sample_document("A")).unwrap();
        assert_eq!(json["issuedOn"], "2026-10-18");
        assert_eq!(json["validUntil"], "2026-11-17");
        assert_eq!(json["result"]["rental"]["monthlyRental"], 1_105_000);
    }
}

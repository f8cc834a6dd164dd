//! # quote-export: Presentation & Export for BenKon Quotes
//!
//! Turns a `CalculationResult` into what the customer actually reads: chart
//! series, cash-flow tables and the printable quotation.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote-core::CalculationResult                                          │
//! │         │                                                               │
//! │         ├──► chart::ChartSeries      (bar + cumulative line data)       │
//! │         ├──► table::CashFlowTable    (13 / 25 rows, milestones)         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  document::QuoteDocument  (+ QT-YYYYMMDD-NNN, issue date, validity)     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  html::render_quote_html  ◄── images::ChartImages (data URLs)           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  exporter::DocumentExporter ──► tokio::fs ──► <out>/BenKon_Quote_*.html │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Labels are looked up through [`i18n`]; nothing here recomputes money.

pub mod chart;
pub mod document;
pub mod error;
pub mod exporter;
pub mod html;
pub mod i18n;
pub mod images;
pub mod table;

pub use chart::{ChartSeries, SeriesKind};
pub use document::{Branding, QuoteDocument, QuoteNumber, DEFAULT_VALIDITY_DAYS};
pub use error::{ExportError, ExportResult};
pub use exporter::DocumentExporter;
pub use html::render_quote_html;
pub use images::{ChartImage, ChartImages};
pub use table::{CashFlowTable, TableView};

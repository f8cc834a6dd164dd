//! # Export Command
//!
//! Issues a quote for the current form and writes the printable HTML.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use quote_core::FormStateRepository;
use quote_export::{ChartImage, ChartImages, DocumentExporter, QuoteDocument};

use crate::cli::FormArgs;
use crate::config::QuoteConfig;
use crate::error::CliError;

/// Chart images to embed, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ChartPaths {
    pub payment: Option<PathBuf>,
    pub cumulative: Option<PathBuf>,
}

/// Validates, calculates, and writes the quotation; returns the file path.
pub async fn execute(
    store: &dyn FormStateRepository,
    config: &QuoteConfig,
    args: &FormArgs,
    out_dir: Option<&Path>,
    charts: &ChartPaths,
    issued_on: NaiveDate,
) -> Result<PathBuf, CliError> {
    let (form, result) = super::prepare(store, config, args)?;

    let charts = ChartImages {
        payment: load_chart(charts.payment.as_deref()).await?,
        cumulative: load_chart(charts.cumulative.as_deref()).await?,
    };

    let doc = QuoteDocument::issue(
        form.customer,
        form.costs,
        result,
        form.language,
        issued_on,
        config.validity_days,
    );
    info!(quote_number = %doc.number, locale = %doc.locale, "Issued quote");

    let exporter = DocumentExporter::new(out_dir.unwrap_or(config.output_dir.as_path()))
        .with_branding(config.branding.clone());

    Ok(exporter.export(&doc, &charts).await?)
}

async fn load_chart(path: Option<&Path>) -> Result<Option<ChartImage>, CliError> {
    match path {
        Some(path) => Ok(Some(ChartImage::load(path).await?)),
        None => Ok(None),
    }
}

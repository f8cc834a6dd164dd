//! # Document Exporter
//!
//! Writes rendered quotations to disk.
//!
//! ## Export Flow
//! ```text
//! QuoteDocument + ChartImages
//!        │
//!        ▼
//! render_quote_html()          pure, repeatable
//!        │
//!        ▼
//! tokio::fs::create_dir_all    output directory
//!        │
//!        ▼
//! tokio::fs::write             <out>/BenKon_Quote_<name>_<yyyymmdd>.html
//! ```
//!
//! A failed write leaves the document untouched, so the caller can fix the
//! problem (permissions, disk space) and export the same document again.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::{Branding, QuoteDocument};
use crate::error::{ExportError, ExportResult};
use crate::html::render_quote_html;
use crate::images::ChartImages;

/// Renders quotations into an output directory.
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    output_dir: PathBuf,
    branding: Branding,
}

impl DocumentExporter {
    /// Exporter with the default BenKon branding.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        DocumentExporter {
            output_dir: output_dir.into(),
            branding: Branding::default(),
        }
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Renders `doc` and writes it, returning the path of the written file.
    ///
    /// An existing file with the same name is overwritten.
    pub async fn export(&self, doc: &QuoteDocument, charts: &ChartImages) -> ExportResult<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ExportError::CreateDir {
                path: self.output_dir.clone(),
                source,
            })?;

        let html = render_quote_html(doc, &self.branding, charts);
        let path = self.output_dir.join(doc.file_name());

        debug!(path = %path.display(), bytes = html.len(), "Writing quotation");

        tokio::fs::write(&path, html.as_bytes())
            .await
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;

        info!(
            quote_number = %doc.number,
            quote_id = %doc.id,
            path = %path.display(),
            "Quotation exported"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quote_core::{compute_comparison, CostComponents, CustomerInfo, Locale};

    fn document() -> QuoteDocument {
        let customer = CustomerInfo::new("Cafe Sài Gòn", 2);
        let costs = CostComponents::default();
        let result = compute_comparison(&customer, &costs);
        let issued_on = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        QuoteDocument::issue(customer, costs, result, Locale::Vi, issued_on, 30)
    }

    #[tokio::test]
    async fn test_export_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quotes").join("2026");
        let exporter = DocumentExporter::new(&out);

        let path = exporter.export(&document(), &ChartImages::none()).await.unwrap();

        assert_eq!(path, out.join("BenKon_Quote_Cafe_S_i_G_n_20261018.html"));
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("BÁO GIÁ"));
        assert!(written.contains("22.100.000 VNĐ"));
    }

    #[tokio::test]
    async fn test_export_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = DocumentExporter::new(dir.path());
        let doc = document();
        let before = doc.clone();

        let first = exporter.export(&doc, &ChartImages::none()).await.unwrap();
        let first_html = tokio::fs::read_to_string(&first).await.unwrap();
        let second = exporter.export(&doc, &ChartImages::none()).await.unwrap();
        let second_html = tokio::fs::read_to_string(&second).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first_html, second_html);
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_export_reports_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("not-a-dir");
        tokio::fs::write(&blocker, b"x").await.unwrap();

        let exporter = DocumentExporter::new(blocker.join("out"));
        let err = exporter.export(&document(), &ChartImages::none()).await.unwrap_err();

        assert!(matches!(err, ExportError::CreateDir { .. }));
    }

    #[tokio::test]
    async fn test_custom_branding_is_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let branding = Branding {
            company: "Acme POS".to_string(),
            ..Branding::default()
        };
        let exporter = DocumentExporter::new(dir.path()).with_branding(branding);

        let path = exporter.export(&document(), &ChartImages::none()).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("Acme POS"));
    }
}

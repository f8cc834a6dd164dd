//! # Chart Images
//!
//! Rendered charts travel as `data:image/...;base64,...` URLs so the
//! exported quotation is a single self-contained file.
//!
//! ```text
//! PNG bytes ──► ChartImage::from_bytes ──┐
//! file.png  ──► ChartImage::load ────────┼──► <img src="data:image/png;base64,...">
//! data URL  ──► ChartImage::from_data_url┘
//! ```

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::error::{ExportError, ExportResult};

/// Largest image accepted for embedding (5 MiB, decoded).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A validated chart image, stored as a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    mime_type: String,
    data_url: String,
}

impl ChartImage {
    /// Wraps raw image bytes.
    ///
    /// ## Example
    /// ```rust
    /// use quote_export::images::ChartImage;
    ///
    /// let image = ChartImage::from_bytes(b"\x89PNG", "image/png").unwrap();
    /// assert_eq!(image.data_url(), "data:image/png;base64,iVBORw==");
    /// ```
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> ExportResult<Self> {
        let mime_type = normalize_mime(mime_type)?;
        validate_size(bytes.len())?;

        let data_url = format!(
            "data:{};base64,{}",
            mime_type,
            general_purpose::STANDARD.encode(bytes)
        );
        Ok(ChartImage { mime_type, data_url })
    }

    /// Accepts an existing data URL, e.g. one produced by a browser canvas.
    pub fn from_data_url(data_url: &str) -> ExportResult<Self> {
        let body = data_url
            .strip_prefix("data:")
            .ok_or_else(|| rejected("data URL must start with 'data:'"))?;

        let (header, payload) = body
            .split_once(',')
            .ok_or_else(|| rejected("data URL is missing the ',' separator"))?;

        let mut header_parts = header.split(';');
        let mime_type = normalize_mime(header_parts.next().unwrap_or_default())?;

        if !header_parts.any(|part| part == "base64") {
            return Err(rejected("only base64-encoded data URLs are supported"));
        }

        let decoded = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| rejected(&format!("invalid base64 data: {}", e)))?;
        validate_size(decoded.len())?;

        Ok(ChartImage {
            data_url: format!("data:{};base64,{}", mime_type, payload),
            mime_type,
        })
    }

    /// Reads an image file, taking the MIME type from its extension.
    pub async fn load(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        let mime_type = mime_from_extension(path)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| rejected(&format!("cannot read {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = bytes.len(), mime = mime_type, "Loaded chart image");

        ChartImage::from_bytes(&bytes, mime_type)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// The two optional charts embedded in a quotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartImages {
    /// Monthly payment bar chart.
    pub payment: Option<ChartImage>,
    /// Cumulative cash-flow line chart.
    pub cumulative: Option<ChartImage>,
}

impl ChartImages {
    pub fn none() -> Self {
        ChartImages::default()
    }

    pub fn is_empty(&self) -> bool {
        self.payment.is_none() && self.cumulative.is_none()
    }
}

fn rejected(reason: &str) -> ExportError {
    ExportError::ChartImage(reason.to_string())
}

fn normalize_mime(mime_type: &str) -> ExportResult<String> {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    if mime_type.len() > "image/".len() && mime_type.starts_with("image/") {
        Ok(mime_type)
    } else {
        Err(rejected(&format!("not an image MIME type: {}", mime_type)))
    }
}

fn validate_size(len: usize) -> ExportResult<()> {
    if len == 0 {
        return Err(rejected("image is empty"));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(rejected(&format!(
            "image too large: {} bytes (max: {} bytes)",
            len, MAX_IMAGE_BYTES
        )));
    }
    Ok(())
}

fn mime_from_extension(path: &Path) -> ExportResult<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "svg" => Ok("image/svg+xml"),
        "webp" => Ok("image/webp"),
        _ => Err(rejected(&format!(
            "unsupported chart image extension: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_data_url() {
        let image = ChartImage::from_bytes(b"hello", "IMAGE/PNG").unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.data_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_from_bytes_rejects_non_images() {
        assert!(matches!(
            ChartImage::from_bytes(b"hello", "text/html"),
            Err(ExportError::ChartImage(_))
        ));
        assert!(ChartImage::from_bytes(b"", "image/png").is_err());
    }

    #[test]
    fn test_size_cap() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(ChartImage::from_bytes(&big, "image/png").is_err());

        let at_limit = vec![0u8; MAX_IMAGE_BYTES];
        assert!(ChartImage::from_bytes(&at_limit, "image/png").is_ok());
    }

    #[test]
    fn test_from_data_url_roundtrip() {
        let original = ChartImage::from_bytes(b"chart", "image/webp").unwrap();
        let parsed = ChartImage::from_data_url(original.data_url()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_from_data_url_rejects_malformed() {
        assert!(ChartImage::from_data_url("image/png;base64,aGVsbG8=").is_err());
        assert!(ChartImage::from_data_url("data:image/png;base64").is_err());
        assert!(ChartImage::from_data_url("data:image/png,aGVsbG8=").is_err());
        assert!(ChartImage::from_data_url("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(ChartImage::from_data_url("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_chart_images_empty() {
        assert!(ChartImages::none().is_empty());
        let images = ChartImages {
            payment: Some(ChartImage::from_bytes(b"x", "image/png").unwrap()),
            cumulative: None,
        };
        assert!(!images.is_empty());
    }

    #[tokio::test]
    async fn test_load_uses_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payment.JPG");
        tokio::fs::write(&path, b"jpegdata").await.unwrap();

        let image = ChartImage::load(&path).await.unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_extension_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let bmp = dir.path().join("chart.bmp");
        tokio::fs::write(&bmp, b"bmp").await.unwrap();
        assert!(ChartImage::load(&bmp).await.is_err());

        assert!(ChartImage::load(dir.path().join("missing.png")).await.is_err());
    }
}

//! # Export Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / base64::DecodeError                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ExportError (this module) ← Adds path / context                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← code + message for the user                       │
//! │                                                                         │
//! │  The CalculationResult is never touched on the way: a failed export    │
//! │  can simply be retried with the same document.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors from rendering or writing a quotation.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chart image could not be read or is not a usable image.
    ///
    /// ## When This Occurs
    /// - Image file missing or unreadable
    /// - Unsupported extension / MIME type
    /// - Malformed data URL or base64 payload
    /// - Image larger than the embed limit
    #[error("Chart image rejected: {0}")]
    ChartImage(String),

    /// A quote number string does not match `QT-YYYYMMDD-NNN`.
    #[error("Invalid quote number: {0}")]
    InvalidQuoteNumber(String),
}

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

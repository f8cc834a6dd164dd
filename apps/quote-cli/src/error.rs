//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Quote CLI                          │
//! │                                                                         │
//! │  Command Function ── Result<T, CliError>                                │
//! │         │                                                               │
//! │         ├── Invalid form?   CoreError::InvalidQuote ──┐                 │
//! │         ├── Bad env var?    ConfigError ──────────────┤                 │
//! │         ├── Write failed?   ExportError ──────────────┼──► CliError     │
//! │         └── JSON output?    serde_json::Error ────────┘       │         │
//! │                                                               ▼         │
//! │                                        stderr + process exit code       │
//! │                                                                         │
//! │  $ quote calculate --customer-name "" --stores 0                        │
//! │  [ValidationError] Invalid quote input                                  │
//! │    - customerName is required                                           │
//! │    - numberOfStores must be at least 1                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use quote_core::CoreError;
use quote_export::ExportError;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// `--format json` failures can be printed as:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invalid quote input",
///   "details": ["customerName is required"]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// One line per offending field, when there are several
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected
    ValidationError,

    /// Environment configuration rejected
    ConfigError,

    /// Quotation could not be written
    ExportError,

    /// Chart image missing or unusable
    ChartImageError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    /// Process exit code: 2 for rejected input, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::ConfigError => 2,
            _ => 1,
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidQuote(errors) => CliError {
                code: ErrorCode::ValidationError,
                message: "Invalid quote input".to_string(),
                details: errors.iter().map(ToString::to_string).collect(),
            },
            CoreError::Validation(e) => CliError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

/// Converts export errors to CLI errors.
impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::ChartImage(_) => CliError::new(ErrorCode::ChartImageError, err.to_string()),
            ExportError::CreateDir { .. } | ExportError::Write { .. } => {
                tracing::error!(error = %err, "Export failed");
                CliError::new(ErrorCode::ExportError, err.to_string())
            }
            ExportError::InvalidQuoteNumber(_) => {
                CliError::new(ErrorCode::ValidationError, err.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        CliError::internal("Failed to produce JSON output")
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        for detail in &self.details {
            write!(f, "\n  - {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::ValidationError;

    #[test]
    fn test_invalid_quote_lists_every_field() {
        let err: CliError = CoreError::InvalidQuote(vec![
            ValidationError::Required {
                field: "customerName".to_string(),
            },
            ValidationError::BelowMinimum {
                field: "numberOfStores".to_string(),
                min: 1,
            },
        ])
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.details.len(), 2);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("[ValidationError] Invalid quote input\n  - "));
    }

    #[test]
    fn test_export_error_mapping() {
        let err: CliError = ExportError::ChartImage("bad".to_string()).into();
        assert_eq!(err.code, ErrorCode::ChartImageError);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_json_shape() {
        let err = CliError::new(ErrorCode::ConfigError, "Invalid value for QUOTE_LANG");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CONFIG_ERROR");
        assert!(json.get("details").is_none());
    }
}

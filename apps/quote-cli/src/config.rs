//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use std::env;
use std::path::PathBuf;

use quote_core::Locale;
use quote_export::{Branding, DEFAULT_VALIDITY_DAYS};

/// Quoting tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Language of a fresh form (`QUOTE_LANG`, default `vi`)
    pub language: Locale,

    /// Days an issued quote stays valid (`QUOTE_VALIDITY_DAYS`, default 30)
    pub validity_days: i64,

    /// Where exported quotations go (`QUOTE_OUTPUT_DIR`, default `.`)
    pub output_dir: PathBuf,

    /// Header/footer company details (`QUOTE_COMPANY_*`)
    pub branding: Branding,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            language: Locale::default(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            output_dir: PathBuf::from("."),
            branding: Branding::default(),
        }
    }
}

impl QuoteConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = QuoteConfig::default();

        let language = match lookup("QUOTE_LANG") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_LANG".to_string()))?,
            None => defaults.language,
        };

        let validity_days = match lookup("QUOTE_VALIDITY_DAYS") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| ConfigError::InvalidValue("QUOTE_VALIDITY_DAYS".to_string()))?,
            None => defaults.validity_days,
        };

        let output_dir = lookup("QUOTE_OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let branding = Branding {
            company: lookup("QUOTE_COMPANY_NAME").unwrap_or(defaults.branding.company),
            tagline: defaults.branding.tagline,
            website: lookup("QUOTE_COMPANY_WEBSITE").unwrap_or(defaults.branding.website),
            email: lookup("QUOTE_COMPANY_EMAIL").unwrap_or(defaults.branding.email),
        };

        Ok(QuoteConfig {
            language,
            validity_days,
            output_dir,
            branding,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<QuoteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QuoteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.language, Locale::Vi);
        assert_eq!(config.validity_days, 30);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("QUOTE_LANG", "EN"),
            ("QUOTE_VALIDITY_DAYS", "45"),
            ("QUOTE_OUTPUT_DIR", "/tmp/quotes"),
            ("QUOTE_COMPANY_NAME", "Acme"),
        ])
        .unwrap();

        assert_eq!(config.language, Locale::En);
        assert_eq!(config.validity_days, 45);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/quotes"));
        assert_eq!(config.branding.company, "Acme");
        assert_eq!(config.branding.email, "support@benkon.io");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("QUOTE_LANG", "fr")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for QUOTE_LANG");

        assert!(load(&[("QUOTE_VALIDITY_DAYS", "soon")]).is_err());
        assert!(load(&[("QUOTE_VALIDITY_DAYS", "0")]).is_err());
    }
}

//! # Form Commands
//!
//! `form show` prints what the next `calculate` would start from;
//! `form reset` forgets it.

use tracing::info;

use quote_core::FormStateRepository;

use crate::config::QuoteConfig;
use crate::error::CliError;

/// Current form as pretty JSON (a fresh form when nothing is saved).
pub fn show(store: &dyn FormStateRepository, config: &QuoteConfig) -> Result<String, CliError> {
    let form = super::current_form(store, config);
    Ok(serde_json::to_string_pretty(&form)?)
}

/// Clears the saved form; the next run starts from the defaults.
pub fn reset(store: &dyn FormStateRepository) {
    store.clear();
    info!("Form reset");
}

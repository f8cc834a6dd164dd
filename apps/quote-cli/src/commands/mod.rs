//! # Commands
//!
//! One module per subcommand. Every command goes through the same prelude:
//!
//! ```text
//! stored form (or fresh form in QUOTE_LANG)
//!        │
//!        ▼  FormArgs::apply
//! merged form ──► store.save()        always, even if invalid
//!        │
//!        ▼  validate_quote_input     all field errors at once
//! compute_comparison ──► CalculationResult
//! ```

pub mod calculate;
pub mod export;
pub mod form;

use tracing::debug;

use quote_core::validation::validate_quote_input;
use quote_core::{compute_comparison, CalculationResult, FormState, FormStateRepository};

use crate::cli::FormArgs;
use crate::config::QuoteConfig;
use crate::error::CliError;

/// The saved form, or a fresh one in the configured language.
pub fn current_form(store: &dyn FormStateRepository, config: &QuoteConfig) -> FormState {
    store.load().unwrap_or_else(|| FormState {
        language: config.language,
        ..FormState::default()
    })
}

/// Merges command-line fields into the saved form, saves it, then
/// validates and calculates.
pub fn prepare(
    store: &dyn FormStateRepository,
    config: &QuoteConfig,
    args: &FormArgs,
) -> Result<(FormState, CalculationResult), CliError> {
    let form = args.apply(current_form(store, config));
    store.save(form.clone());

    validate_quote_input(&form.customer, &form.costs)?;

    let result = compute_comparison(&form.customer, &form.costs);
    debug!(
        stores = form.customer.number_of_stores,
        purchase_total = result.purchase.total_two_year_cost.dong(),
        rental_total = result.rental.total_two_year_cost.dong(),
        "Quote calculated"
    );

    Ok((form, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use quote_core::{Locale, MemoryFormStore};

    #[test]
    fn test_fresh_form_uses_configured_language() {
        let store = MemoryFormStore::new();
        let config = QuoteConfig {
            language: Locale::En,
            ..QuoteConfig::default()
        };
        assert_eq!(current_form(&store, &config).language, Locale::En);
    }

    #[test]
    fn test_invalid_form_is_saved_but_rejected() {
        let store = MemoryFormStore::new();
        let args = FormArgs {
            stores: Some(0),
            ..FormArgs::default()
        };

        let err = prepare(&store, &QuoteConfig::default(), &args).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        // Blank name and zero stores reported together
        assert_eq!(err.details.len(), 2);
        assert_eq!(store.load().map(|f| f.customer.number_of_stores), Some(0));
    }

    #[test]
    fn test_stored_fields_fill_in_missing_args() {
        let store = MemoryFormStore::new();
        let config = QuoteConfig::default();

        let first = FormArgs {
            customer_name: Some("Cafe".to_string()),
            stores: Some(3),
            ..FormArgs::default()
        };
        prepare(&store, &config, &first).unwrap();

        let (form, result) = prepare(&store, &config, &FormArgs::default()).unwrap();
        assert_eq!(form.customer.customer_name, "Cafe");
        assert_eq!(result.purchase.month0_cost.dong(), 19_900_000);
    }
}

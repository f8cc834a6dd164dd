use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use quote_core::format::parse_amount_input;
use quote_core::{FormState, Locale};

#[derive(Parser, Debug)]
#[command(name = "quote", version, about = "BenKon purchase vs rental quotation tool")]
pub struct Cli {
    /// JSON file holding the form between runs (in-memory when omitted)
    #[arg(long, global = true, env = "QUOTE_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare purchase and rental for the current form
    Calculate {
        #[command(flatten)]
        form: FormArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show all 25 months instead of the first 13
        #[arg(long)]
        full: bool,
    },

    /// Write a printable HTML quotation
    Export {
        #[command(flatten)]
        form: FormArgs,

        /// Output directory (defaults to QUOTE_OUTPUT_DIR or ".")
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Rendered monthly payment chart to embed (png, jpg, svg, webp)
        #[arg(long)]
        payment_chart: Option<PathBuf>,

        /// Rendered cumulative cash-flow chart to embed
        #[arg(long)]
        cumulative_chart: Option<PathBuf>,
    },

    /// Inspect or reset the saved form
    Form {
        #[command(subcommand)]
        action: FormCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommands {
    /// Print the saved form as JSON
    Show,
    /// Forget the saved form
    Reset,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Form fields settable from the command line.
///
/// Amounts accept grouped input such as `6.500.000` or `6,500,000`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormArgs {
    #[arg(long)]
    pub customer_name: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    /// Number of stores
    #[arg(long, allow_negative_numbers = true)]
    pub stores: Option<i64>,

    /// Hardware cost (VND)
    #[arg(long)]
    pub hardware: Option<String>,

    /// Software cost per year (VND)
    #[arg(long)]
    pub software: Option<String>,

    /// Installation cost per store (VND)
    #[arg(long)]
    pub installation: Option<String>,

    /// Setup service per store (VND)
    #[arg(long)]
    pub setup: Option<String>,

    /// Quote language: vi or en
    #[arg(long)]
    pub lang: Option<Locale>,
}

impl FormArgs {
    /// Overlays the given fields on `base`; anything not given is kept.
    pub fn apply(&self, mut base: FormState) -> FormState {
        if let Some(name) = &self.customer_name {
            base.customer.customer_name = name.trim().to_string();
        }
        if let Some(company) = &self.company {
            base.customer.company_name = non_empty(company);
        }
        if let Some(address) = &self.address {
            base.customer.address = non_empty(address);
        }
        if let Some(contact) = &self.contact {
            base.customer.contact = non_empty(contact);
        }
        if let Some(stores) = self.stores {
            base.customer.number_of_stores = stores;
        }

        let costs = &mut base.costs;
        for (input, slot) in [
            (&self.hardware, &mut costs.hardware_cost),
            (&self.software, &mut costs.software_cost_per_year),
            (&self.installation, &mut costs.installation_cost_per_store),
            (&self.setup, &mut costs.setup_service_per_store),
        ] {
            if let Some(input) = input {
                *slot = parse_amount_input(input);
            }
        }

        if let Some(lang) = self.lang {
            base.language = lang;
        }
        base
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::{CustomerInfo, Money};

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "quote",
            "calculate",
            "--customer-name",
            "Cafe",
            "--stores",
            "3",
            "--hardware",
            "7.000.000",
            "--lang",
            "en",
            "--format",
            "json",
            "--full",
        ])
        .unwrap();

        match cli.command {
            Commands::Calculate { form, format, full } => {
                assert_eq!(form.customer_name.as_deref(), Some("Cafe"));
                assert_eq!(form.stores, Some(3));
                assert_eq!(form.lang, Some(Locale::En));
                assert_eq!(format, OutputFormat::Json);
                assert!(full);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["quote", "calculate", "--lang", "fr"]).is_err());
    }

    #[test]
    fn test_parse_form_reset_with_state_file() {
        let cli = Cli::try_parse_from(["quote", "form", "reset", "--state-file", "f.json"]).unwrap();
        assert_eq!(cli.state_file, Some(PathBuf::from("f.json")));
        assert!(matches!(
            cli.command,
            Commands::Form {
                action: FormCommands::Reset
            }
        ));
    }

    #[test]
    fn test_apply_overlays_only_given_fields() {
        let base = FormState {
            customer: CustomerInfo::new("Old", 2),
            ..FormState::default()
        };
        let args = FormArgs {
            stores: Some(5),
            hardware: Some("7,000,000".to_string()),
            company: Some("  ".to_string()),
            ..FormArgs::default()
        };

        let merged = args.apply(base);
        assert_eq!(merged.customer.customer_name, "Old");
        assert_eq!(merged.customer.number_of_stores, 5);
        assert_eq!(merged.customer.company_name, None);
        assert_eq!(merged.costs.hardware_cost, Money::from_dong(7_000_000));
        assert_eq!(merged.costs.software_cost_per_year, Money::from_dong(5_000_000));
    }

    #[test]
    fn test_apply_garbage_amount_becomes_zero() {
        let args = FormArgs {
            setup: Some("free".to_string()),
            ..FormArgs::default()
        };
        let merged = args.apply(FormState::default());
        assert_eq!(merged.costs.setup_service_per_store, Money::zero());
    }
}

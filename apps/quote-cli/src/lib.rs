//! # BenKon Quote CLI Library
//!
//! Everything behind the `quote` binary, kept in a library so commands can
//! be tested without spawning a process.
//!
//! ## Module Organization
//! ```text
//! quote_cli/
//! ├── lib.rs          ◄─── You are here (logging + dispatch)
//! ├── cli.rs          ◄─── clap definitions, FormArgs merging
//! ├── config.rs       ◄─── QUOTE_* environment configuration
//! ├── state.rs        ◄─── Form state stores (memory / JSON file)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared prepare: merge → save → validate → calculate
//! │   ├── calculate.rs
//! │   ├── export.rs
//! │   └── form.rs
//! └── error.rs        ◄─── CliError with machine-readable codes
//! ```
//!
//! ## Output Streams
//! Results go to stdout; logs and errors go to stderr, so
//! `quote calculate --format json | jq` always sees clean JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, FormCommands};
use commands::export::ChartPaths;
use config::QuoteConfig;
use error::CliError;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,quote=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one parsed command line.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = QuoteConfig::from_env()?;
    let store = state::open_store(cli.state_file.as_deref());
    debug!(state_file = ?cli.state_file, "Starting command");

    match cli.command {
        Commands::Calculate { form, format, full } => {
            let output = commands::calculate::execute(store.as_ref(), &config, &form, format, full)?;
            println!("{}", output);
        }
        Commands::Export {
            form,
            out_dir,
            payment_chart,
            cumulative_chart,
        } => {
            let charts = ChartPaths {
                payment: payment_chart,
                cumulative: cumulative_chart,
            };
            let today = chrono::Local::now().date_naive();
            let path = commands::export::execute(
                store.as_ref(),
                &config,
                &form,
                out_dir.as_deref(),
                &charts,
                today,
            )
            .await?;
            println!("{}", path.display());
        }
        Commands::Form { action } => match action {
            FormCommands::Show => println!("{}", commands::form::show(store.as_ref(), &config)?),
            FormCommands::Reset => commands::form::reset(store.as_ref()),
        },
    }

    Ok(())
}

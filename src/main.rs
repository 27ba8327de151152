//! Drone delivery scheduler - batch departure planning for a single drone
//!
//! Reads an order batch file, flies the shortest round trips first, and
//! writes one departure line per order.

mod cli;
mod config;
mod defaults;
mod services;
mod types;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging - RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let cli = cli::Cli::parse();
    let config = config::Config::from_env()?;

    match cli.command {
        cli::Command::Schedule {
            input,
            output,
            departure,
            format,
        } => {
            let initial_departure = match departure {
                Some(raw) => NaiveTime::parse_from_str(&raw, defaults::TIME_FORMAT)
                    .with_context(|| format!("invalid initial departure time: {raw}"))?,
                None => config.initial_departure,
            };

            let outcome =
                services::batch_processor::run(&input, &output, initial_departure, format)?;
            info!(
                "Batch complete: {} scheduled, {} rejected",
                outcome.scheduled, outcome.rejected
            );
        }
        cli::Command::Validate { input } => {
            let outcome = services::batch_processor::validate(&input)?;
            info!(
                "Validation complete: {} valid orders, {} rejected lines",
                outcome.scheduled, outcome.rejected
            );
        }
    }

    Ok(())
}

//! CLI argument parsing for the drone-scheduler binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::services::batch_processor::OutputFormat;

#[derive(Parser)]
#[command(name = "drone-scheduler", about = "Single-drone delivery batch scheduler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Schedule a batch of orders and write the departure file
    Schedule {
        /// Path to the order batch file
        #[arg(long)]
        input: PathBuf,
        /// Path for the scheduled departures file
        #[arg(long)]
        output: PathBuf,
        /// Initial departure time (HH:MM:SS); overrides INITIAL_DEPARTURE
        #[arg(long)]
        departure: Option<String>,
        /// Output encoding
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate a batch file without scheduling it
    Validate {
        /// Path to the order batch file
        #[arg(long)]
        input: PathBuf,
    },
}

//! Configuration management

use anyhow::{Context, Result};
use chrono::NaiveTime;

use crate::defaults;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Departure time for the first delivery of a batch, unless overridden
    /// on the command line.
    pub initial_departure: NaiveTime,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let initial_departure = match std::env::var("INITIAL_DEPARTURE") {
            Ok(raw) => NaiveTime::parse_from_str(&raw, defaults::TIME_FORMAT)
                .with_context(|| format!("INITIAL_DEPARTURE is not a valid HH:MM:SS time: {raw}"))?,
            Err(_) => defaults::default_initial_departure(),
        };

        Ok(Self { initial_departure })
    }
}

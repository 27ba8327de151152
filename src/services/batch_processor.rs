//! Batch scheduling pipeline: read, validate, schedule, write.
//!
//! The schedule file is rendered fully in memory and persisted with a single
//! write, so a failed batch never leaves a partial schedule behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::ValueEnum;
use tracing::info;

use crate::defaults::TIME_FORMAT;
use crate::services::{intake, scheduler};
use crate::types::Order;

/// Output encoding for the schedule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<id> <HH:MM:SS>` line per order.
    Text,
    /// Full scheduled orders as a JSON array.
    Json,
}

/// Summary of a processed batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchOutcome {
    pub scheduled: usize,
    pub rejected: usize,
}

/// Run the full pipeline for one batch file.
pub fn run(
    input_path: &Path,
    output_path: &Path,
    initial_departure: NaiveTime,
    format: OutputFormat,
) -> Result<BatchOutcome> {
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("could not read order batch: {}", input_path.display()))?;
    let report = intake::parse_batch(&raw);
    let rejected = report.issues.len();

    let mut orders = scheduler::sort_for_delivery(report.orders);
    scheduler::assign_departures(&mut orders, initial_departure);

    let mut rendered = Vec::new();
    write_schedule(&orders, format, &mut rendered)?;
    fs::write(output_path, &rendered)
        .with_context(|| format!("could not write schedule: {}", output_path.display()))?;

    info!(
        "Scheduled {} orders to {} ({} lines rejected)",
        orders.len(),
        output_path.display(),
        rejected
    );

    Ok(BatchOutcome {
        scheduled: orders.len(),
        rejected,
    })
}

/// Validate a batch file without scheduling or writing anything.
pub fn validate(input_path: &Path) -> Result<BatchOutcome> {
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("could not read order batch: {}", input_path.display()))?;
    let report = intake::parse_batch(&raw);

    Ok(BatchOutcome {
        scheduled: report.orders.len(),
        rejected: report.issues.len(),
    })
}

/// Write the scheduled batch to any sink.
///
/// Orders must already carry a departure time; a missing one is an invariant
/// violation, not a recoverable condition.
pub fn write_schedule<W: Write>(
    orders: &[Order],
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for order in orders {
                writeln!(writer, "{}", schedule_line(order)?)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, orders)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Format one schedule line: `<id> <HH:MM:SS departure>`.
fn schedule_line(order: &Order) -> Result<String> {
    let departure = order
        .departure_at
        .with_context(|| format!("order {} has no assigned departure", order.id))?;
    Ok(format!("{} {}", order.id, departure.format(TIME_FORMAT)))
}

//! Order batch intake: per-line validation and parsing.
//!
//! Every raw line is either a well-formed order or rejected with an explicit
//! reason — nothing partial reaches the scheduler. Rejected lines are
//! collected as issues (with their 1-based line number) so callers can report
//! them without aborting the batch.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::defaults::TIME_FORMAT;
use crate::types::{GridCoordinate, Order};

static ORDER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^WM\d{3}$").expect("valid order id pattern"));
static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("valid timestamp pattern"));

/// Reason a raw order line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line is empty")]
    Empty,
    #[error("expected 3 fields (id, coordinate, timestamp), found {0}")]
    FieldCount(usize),
    #[error("invalid order identifier: {0}")]
    InvalidOrderId(String),
    #[error("invalid grid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("invalid order timestamp: {0}")]
    InvalidTimestamp(String),
}

/// A single rejected input line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeIssue {
    pub line_number: usize,
    pub message: String,
    pub original_line: String,
}

/// Result of validating a whole batch.
#[derive(Debug, Default)]
pub struct IntakeReport {
    pub orders: Vec<Order>,
    pub issues: Vec<IntakeIssue>,
}

/// Parse one raw order line, e.g. `WM001 N11W5 05:11:50`.
pub fn parse_order_line(line: &str) -> Result<Order, LineError> {
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != 3 {
        return Err(LineError::FieldCount(fields.len()));
    }
    let (id, raw_coordinate, raw_timestamp) = (fields[0], fields[1], fields[2]);

    if !ORDER_ID_RE.is_match(id) {
        return Err(LineError::InvalidOrderId(id.to_string()));
    }

    let coordinate: GridCoordinate = raw_coordinate
        .parse()
        .map_err(|_| LineError::InvalidCoordinate(raw_coordinate.to_string()))?;

    // Shape check first, then a strict wall-clock parse (rejects 25:00:00).
    if !TIMESTAMP_RE.is_match(raw_timestamp) {
        return Err(LineError::InvalidTimestamp(raw_timestamp.to_string()));
    }
    let requested_at = NaiveTime::parse_from_str(raw_timestamp, TIME_FORMAT)
        .map_err(|_| LineError::InvalidTimestamp(raw_timestamp.to_string()))?;

    Ok(Order::new(id, coordinate, requested_at))
}

/// Validate a whole batch, filtering rejected lines into issues.
pub fn parse_batch(input: &str) -> IntakeReport {
    let mut report = IntakeReport::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        match parse_order_line(line) {
            Ok(order) => report.orders.push(order),
            Err(reason) => {
                warn!("Rejected order line {}: {}", line_number, reason);
                report.issues.push(IntakeIssue {
                    line_number,
                    message: reason.to_string(),
                    original_line: line.to_string(),
                });
            }
        }
    }

    report
}

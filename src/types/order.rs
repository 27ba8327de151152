//! Delivery order types

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::services::geo;

use super::GridCoordinate;

/// A single delivery order in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier, e.g. "WM001".
    pub id: String,
    /// Delivery destination on the grid.
    pub coordinate: GridCoordinate,
    /// Time the customer placed the order. Carried through for output
    /// consumers; does not influence scheduling.
    pub requested_at: NaiveTime,
    /// Round-trip flight distance in grid units. Fixed at construction.
    pub round_trip_distance: f64,
    /// Departure slot assigned by the scheduler, exactly once, after sorting.
    pub departure_at: Option<NaiveTime>,
}

impl Order {
    pub fn new(id: impl Into<String>, coordinate: GridCoordinate, requested_at: NaiveTime) -> Self {
        Self {
            id: id.into(),
            coordinate,
            requested_at,
            round_trip_distance: geo::round_trip_distance(&coordinate),
            departure_at: None,
        }
    }
}

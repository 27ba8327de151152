//! Departure scheduling for a single-drone delivery batch.
//!
//! One drone, one depot: orders fly out shortest round trip first, and each
//! departure follows the moment the drone returns from the previous delivery.
//! This module walks the sorted batch once and stamps a departure time on
//! every order — it does NOT re-optimise the order, just propagates times.

use chrono::{Duration, NaiveTime};

use crate::services::geo;
use crate::types::Order;

/// Sort orders into delivery sequence: ascending round-trip distance.
///
/// The sort is stable — orders at equal distance keep their input order.
pub fn sort_for_delivery(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| a.round_trip_distance.total_cmp(&b.round_trip_distance));
    orders
}

/// Assign a departure time to every order in delivery sequence.
///
/// The first order departs at `initial_departure`; each later order departs
/// the moment the drone returns from the one before it, i.e. the previous
/// departure plus the previous round trip rounded to whole minutes. A single
/// forward pass carries the running clock, so each departure depends only on
/// the order immediately before it.
pub fn assign_departures(orders: &mut [Order], initial_departure: NaiveTime) {
    let mut next_departure = initial_departure;
    for order in orders.iter_mut() {
        order.departure_at = Some(next_departure);
        next_departure = add_minutes(
            next_departure,
            geo::round_trip_minutes(order.round_trip_distance),
        );
    }
}

/// Wall-clock addition with wraparound past midnight. No date is tracked.
fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(minutes)).0
}

// ===========================================================================
// Tests
// ===========================================================================

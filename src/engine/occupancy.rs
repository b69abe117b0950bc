//! Occupancy computation for a single instant.

use chrono::NaiveDate;

use crate::models::{Reservation, TimeOfDay};

/// Capacity units consumed at one instant on one date.
///
/// Sums `required_units` over confirmed reservations whose half-open
/// interval `[start_time, end_time)` covers the instant. A reservation
/// ending exactly at the queried instant does not count against it, so
/// back-to-back bookings never contend.
///
/// Pure and O(n) in the reservation set; daily reservation counts are small
/// enough that a per-date interval tree is not worth its weight here.
pub fn occupancy_at(date: NaiveDate, instant: TimeOfDay, reservations: &[Reservation]) -> u32 {
    reservations
        .iter()
        .filter(|r| r.is_active() && r.covers(date, instant))
        .map(|r| r.required_units)
        .sum()
}

//! Day-level availability aggregation for calendar hints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::occupancy::occupancy_at;
use super::slots::slot_grid;
use crate::models::{AvailabilityThresholds, Reservation, Settings};

/// Advisory classification of a day's remaining capacity.
///
/// Display-only. The booking validator is authoritative for admission; this
/// never gates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityLevel {
    Full,
    Limited,
    Plenty,
}

/// Remaining-capacity ratio for a whole day, in `[0, 1]`.
///
/// Sum over all grid slots of `max(0, capacity - occupancy)`, divided by
/// `slot_count * capacity`. A day with no bookable slots (degenerate
/// settings) or zero capacity reads as 0.0 so it never displays as
/// available.
pub fn daily_availability_ratio(
    date: NaiveDate,
    reservations: &[Reservation],
    settings: &Settings,
) -> f64 {
    let grid = slot_grid(settings);
    let capacity = settings.max_capacity_units;
    if grid.is_empty() || capacity == 0 {
        return 0.0;
    }
    let free: u64 = grid
        .iter()
        .map(|slot| u64::from(capacity.saturating_sub(occupancy_at(date, slot.offset, reservations))))
        .sum();
    free as f64 / (grid.len() as u64 * u64::from(capacity)) as f64
}

/// Classify a ratio against the configured thresholds.
pub fn classify_availability(ratio: f64, thresholds: &AvailabilityThresholds) -> AvailabilityLevel {
    if ratio <= thresholds.full {
        AvailabilityLevel::Full
    } else if ratio < thresholds.limited {
        AvailabilityLevel::Limited
    } else {
        AvailabilityLevel::Plenty
    }
}

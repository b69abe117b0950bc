//! Per-day slot and availability summaries for the calendar UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::repository::{RepositoryResult, StoreRepository};
use crate::engine::{
    check_booking, check_booking_date, classify_availability, daily_availability_ratio,
    occupancy_at, slot_grid, AvailabilityLevel,
};
use crate::models::{Product, TimeOfDay};

/// One grid slot with its current load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotStatus {
    pub offset: TimeOfDay,
    pub label: String,
    pub occupied_units: u32,
    pub remaining_units: u32,
    /// Whether a booking for the queried product could start here. Only set
    /// when the caller asked with a product in hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookable: Option<bool>,
}

/// Advisory day-level availability summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub ratio: f64,
    pub level: AvailabilityLevel,
}

/// Slot grid for one date with per-slot occupancy, and optionally a
/// bookability flag for a specific product.
///
/// The flag applies the same date policy as admission (past date, holiday,
/// horizon, with `today` injected), so a slot never advertises as bookable
/// when the booking endpoint would reject it.
pub async fn day_slots(
    repo: &dyn StoreRepository,
    date: NaiveDate,
    today: NaiveDate,
    product: Option<&Product>,
) -> RepositoryResult<Vec<SlotStatus>> {
    let settings = repo.load_settings().await?;
    let reservations = repo.reservations_on(date).await?;
    let date_bookable = check_booking_date(date, today, &settings).is_ok();

    Ok(slot_grid(&settings)
        .into_iter()
        .map(|slot| {
            let occupied = occupancy_at(date, slot.offset, &reservations);
            SlotStatus {
                occupied_units: occupied,
                remaining_units: settings.max_capacity_units.saturating_sub(occupied),
                bookable: product.map(|p| {
                    date_bookable
                        && check_booking(date, slot.offset, p, &reservations, &settings).is_ok()
                }),
                offset: slot.offset,
                label: slot.label,
            }
        })
        .collect())
}

/// Remaining-capacity ratio and classification for one date.
///
/// Advisory only: calendar-level hints, never booking admission.
pub async fn day_availability(
    repo: &dyn StoreRepository,
    date: NaiveDate,
) -> RepositoryResult<DayAvailability> {
    let settings = repo.load_settings().await?;
    let reservations = repo.reservations_on(date).await?;
    let ratio = daily_availability_ratio(date, &reservations, &settings);
    Ok(DayAvailability {
        date,
        ratio,
        level: classify_availability(ratio, &settings.availability_thresholds),
    })
}

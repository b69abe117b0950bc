//! Booking admissibility checks.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::occupancy::occupancy_at;
use crate::models::{Product, Reservation, Settings, TimeOfDay};

/// Why a proposed booking was not admitted.
///
/// Rejection is an expected negative outcome, not a fault: callers present
/// the reason to the user and carry on. Each variant maps to a stable code
/// for the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The requested date is strictly before today.
    PastDate,
    /// The requested date is in the holiday calendar.
    Holiday,
    /// The requested date is beyond the booking horizon.
    BeyondHorizon,
    /// The booking would start before open or run past close.
    AfterHours,
    /// Admitting the booking would exceed capacity at this slot.
    CapacityExceeded { at: TimeOfDay },
}

impl RejectionReason {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PastDate => "PAST_DATE",
            Self::Holiday => "HOLIDAY",
            Self::BeyondHorizon => "BEYOND_HORIZON",
            Self::AfterHours => "AFTER_HOURS",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PastDate => write!(f, "the requested date is in the past"),
            Self::Holiday => write!(f, "the requested date is a holiday"),
            Self::BeyondHorizon => write!(f, "the requested date is beyond the booking horizon"),
            Self::AfterHours => write!(f, "the booking does not fit within business hours"),
            Self::CapacityExceeded { at } => {
                write!(f, "no remaining capacity at {at}")
            }
        }
    }
}

/// Date-level booking policy: past dates, holidays, and the calendar
/// horizon.
///
/// Lives here rather than in [`check_booking`] because "past" depends on
/// wall-clock time at call time; the caller injects `today` so the policy
/// stays testable.
pub fn check_booking_date(
    date: NaiveDate,
    today: NaiveDate,
    settings: &Settings,
) -> Result<(), RejectionReason> {
    if date < today {
        return Err(RejectionReason::PastDate);
    }
    if settings.is_holiday(date) {
        return Err(RejectionReason::Holiday);
    }
    if date > settings.horizon_end(today) {
        return Err(RejectionReason::BeyondHorizon);
    }
    Ok(())
}

/// Decide admissibility of a proposed booking against the current
/// reservation set. Returns the computed end time on success.
///
/// Legal start times come from the slot grid, but the check stands on its
/// own: a hand-crafted start before opening time is rejected here rather
/// than relying on the caller to have picked a grid offset.
///
/// The walk visits every grid-aligned instant from `start` (inclusive) up to
/// `start + duration` (exclusive), stepping by the slot interval. A duration
/// that is not a multiple of the interval still has its final partial slot
/// validated: the last stepped instant below the end boundary is checked,
/// never silently skipped. All-or-nothing; the first failing instant rejects
/// the whole booking.
pub fn check_booking(
    date: NaiveDate,
    start: TimeOfDay,
    product: &Product,
    reservations: &[Reservation],
    settings: &Settings,
) -> Result<TimeOfDay, RejectionReason> {
    if start < settings.open_time {
        return Err(RejectionReason::AfterHours);
    }
    let end = u32::from(start.minutes()) + product.duration_minutes;
    if end > u32::from(settings.close_time.minutes()) {
        return Err(RejectionReason::AfterHours);
    }
    let end_time = u16::try_from(end)
        .ok()
        .and_then(TimeOfDay::from_minutes)
        .ok_or(RejectionReason::AfterHours)?;

    let mut minute = u32::from(start.minutes());
    while minute < end {
        let Some(instant) = u16::try_from(minute).ok().and_then(TimeOfDay::from_minutes) else {
            break;
        };
        let occupied = occupancy_at(date, instant, reservations);
        if occupied + product.required_units > settings.max_capacity_units {
            return Err(RejectionReason::CapacityExceeded { at: instant });
        }
        if settings.slot_interval_minutes == 0 {
            break;
        }
        minute += settings.slot_interval_minutes;
    }
    Ok(end_time)
}

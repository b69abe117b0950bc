//! Slot grid generation from business-hour settings.

use serde::{Deserialize, Serialize};

use crate::models::{Settings, TimeOfDay};

/// A bookable start-time offset within business hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Start-time offset from midnight.
    pub offset: TimeOfDay,
    /// Display label, `HH:MM`.
    pub label: String,
}

/// Generate the ordered sequence of bookable start times for a day.
///
/// Steps from `open_time` by `slot_interval_minutes` and stops strictly
/// before `close_time`; the loop terminates on the minute-of-day comparison,
/// never on a slot count, so an interval that does not divide the open
/// window evenly cannot overshoot close. Degenerate settings (open >= close,
/// zero interval) yield an empty grid.
pub fn slot_grid(settings: &Settings) -> Vec<Slot> {
    let mut slots = Vec::new();
    if settings.slot_interval_minutes == 0 {
        return slots;
    }
    let close = u32::from(settings.close_time.minutes());
    let mut minute = u32::from(settings.open_time.minutes());
    while minute < close {
        let Some(offset) = u16::try_from(minute).ok().and_then(TimeOfDay::from_minutes) else {
            break;
        };
        slots.push(Slot {
            offset,
            label: offset.to_string(),
        });
        minute += settings.slot_interval_minutes;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(open: &str, close: &str, interval: u32) -> Settings {
        Settings {
            open_time: open.parse().unwrap(),
            close_time: close.parse().unwrap(),
            slot_interval_minutes: interval,
            ..Settings::default()
        }
    }

    #[test]
    fn test_standard_grid() {
        let grid = slot_grid(&settings("09:00", "19:00", 30));
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0].label, "09:00");
        assert_eq!(grid[1].label, "09:30");
        assert_eq!(grid.last().unwrap().label, "18:30");
    }

    #[test]
    fn test_grid_never_reaches_close() {
        let grid = slot_grid(&settings("09:00", "19:00", 30));
        let close: TimeOfDay = "19:00".parse().unwrap();
        assert!(grid.iter().all(|slot| slot.offset < close));
    }

    #[test]
    fn test_uneven_interval_does_not_overshoot() {
        // 09:00..10:00 stepped by 45 -> only 09:00 and 09:45
        let grid = slot_grid(&settings("09:00", "10:00", 45));
        let labels: Vec<_> = grid.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["09:00", "09:45"]);
    }

    #[test]
    fn test_open_equal_close_is_empty() {
        assert!(slot_grid(&settings("09:00", "09:00", 30)).is_empty());
    }

    #[test]
    fn test_open_after_close_is_empty() {
        assert!(slot_grid(&settings("19:00", "09:00", 30)).is_empty());
    }

    #[test]
    fn test_zero_interval_is_empty() {
        assert!(slot_grid(&settings("09:00", "19:00", 0)).is_empty());
    }

    #[test]
    fn test_grid_is_strictly_increasing() {
        let grid = slot_grid(&settings("08:15", "17:40", 25));
        for pair in grid.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
    }
}

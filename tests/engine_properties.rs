//! Property tests for the availability engine.

use chrono::NaiveDate;
use proptest::prelude::*;

use pickdesk::engine::{check_booking, occupancy_at, slot_grid};
use pickdesk::models::{CustomerInfo, Product, Reservation, Settings, TimeOfDay};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Ada".to_string(),
        phone: "555-0100".to_string(),
        note: None,
    }
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    // open < close within the day, positive interval
    (0u16..1439, 1u32..=180)
        .prop_flat_map(|(open, interval)| {
            ((open + 1)..1440).prop_map(move |close| (open, close, interval))
        })
        .prop_map(|(open, close, interval)| Settings {
            open_time: TimeOfDay::from_minutes(open).unwrap(),
            close_time: TimeOfDay::from_minutes(close).unwrap(),
            slot_interval_minutes: interval,
            ..Settings::default()
        })
}

/// (start minute, duration, units) triples that stay inside the day.
fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (0u16..1380, 1u32..=120, 1u32..=4).prop_map(|(start, duration, units)| {
        let product = Product {
            id: "p".to_string(),
            name: "P".to_string(),
            required_units: units,
            duration_minutes: duration,
        };
        let start = TimeOfDay::from_minutes(start).unwrap();
        let end = start
            .checked_add_minutes(duration)
            .unwrap_or_else(|| TimeOfDay::from_minutes(1439).unwrap());
        Reservation::confirmed(date(), start, end, &product, customer())
    })
}

proptest! {
    /// Every generated slot offset satisfies open <= offset < close.
    #[test]
    fn grid_offsets_stay_within_hours(settings in settings_strategy()) {
        let grid = slot_grid(&settings);
        for slot in &grid {
            prop_assert!(settings.open_time <= slot.offset);
            prop_assert!(slot.offset < settings.close_time);
        }
    }

    /// Consecutive slots are exactly one interval apart.
    #[test]
    fn grid_steps_by_interval(settings in settings_strategy()) {
        let grid = slot_grid(&settings);
        for pair in grid.windows(2) {
            let gap = pair[0].offset.minutes_until(pair[1].offset);
            prop_assert_eq!(gap, Some(settings.slot_interval_minutes as u16));
        }
    }

    /// Occupancy is monotonically non-decreasing as confirmed reservations
    /// are added, and unaffected by cancelled ones.
    #[test]
    fn occupancy_monotone_under_additions(
        reservations in prop::collection::vec(reservation_strategy(), 0..12),
        instant in 0u16..1440,
    ) {
        let instant = TimeOfDay::from_minutes(instant).unwrap();
        let mut set: Vec<Reservation> = Vec::new();
        let mut last = 0;
        for reservation in reservations {
            set.push(reservation);
            let now = occupancy_at(date(), instant, &set);
            prop_assert!(now >= last);
            last = now;
        }

        // cancelling everything drops occupancy to zero
        for r in &mut set {
            r.status = pickdesk::models::ReservationStatus::Cancelled;
        }
        prop_assert_eq!(occupancy_at(date(), instant, &set), 0);
    }

    /// check_booking agrees with the exhaustive definition: admissible iff
    /// the booking fits in hours and every covered stepped instant has room.
    #[test]
    fn admissibility_matches_exhaustive_check(
        reservations in prop::collection::vec(reservation_strategy(), 0..10),
        start in 0u16..1440,
        duration in 1u32..=180,
        units in 1u32..=6,
    ) {
        let settings = Settings::default();
        let start = TimeOfDay::from_minutes(start).unwrap();
        let product = Product {
            id: "candidate".to_string(),
            name: "Candidate".to_string(),
            required_units: units,
            duration_minutes: duration,
        };

        let result = check_booking(date(), start, &product, &reservations, &settings);

        let end = u32::from(start.minutes()) + duration;
        if start < settings.open_time || end > u32::from(settings.close_time.minutes()) {
            prop_assert!(result.is_err());
        } else {
            let mut expected_ok = true;
            let mut minute = u32::from(start.minutes());
            while minute < end {
                let instant = TimeOfDay::from_minutes(minute as u16).unwrap();
                let occupied = occupancy_at(date(), instant, &reservations);
                if occupied + units > settings.max_capacity_units {
                    expected_ok = false;
                    break;
                }
                minute += settings.slot_interval_minutes;
            }
            prop_assert_eq!(result.is_ok(), expected_ok);
        }
    }

    /// Validating the same request twice against an unchanged set yields
    /// the same result.
    #[test]
    fn validation_is_idempotent(
        reservations in prop::collection::vec(reservation_strategy(), 0..10),
        start in 0u16..1440,
        duration in 1u32..=180,
    ) {
        let settings = Settings::default();
        let start = TimeOfDay::from_minutes(start).unwrap();
        let product = Product {
            id: "candidate".to_string(),
            name: "Candidate".to_string(),
            required_units: 2,
            duration_minutes: duration,
        };
        let first = check_booking(date(), start, &product, &reservations, &settings);
        let second = check_booking(date(), start, &product, &reservations, &settings);
        prop_assert_eq!(first, second);
    }
}

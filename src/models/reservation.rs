//! Reservation records: booked picking intervals with their product snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Product;
use super::time::TimeOfDay;

/// Lifecycle status of a reservation.
///
/// The only transition is `Confirmed -> Cancelled`. Cancelled records keep
/// their place in the store for history display; an operator hard-delete
/// removes the record entirely instead of transitioning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

/// Customer contact details captured with a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A booked picking interval.
///
/// Product fields are denormalized snapshots taken at booking time, so the
/// catalog may change later without retroactively altering past bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    /// Derived at admission as `start_time + product.duration_minutes`.
    pub end_time: TimeOfDay,
    pub product_id: String,
    pub product_name: String,
    /// Capacity cost snapshot of the product at booking time.
    pub required_units: u32,
    pub customer: CustomerInfo,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Build a confirmed reservation from a validated request.
    ///
    /// `end_time` comes from the booking validator, which has already proved
    /// the interval fits within business hours.
    pub fn confirmed(
        date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        product: &Product,
        customer: CustomerInfo,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            start_time,
            end_time,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            required_units: product.required_units,
            customer,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    /// Whether this reservation still consumes capacity.
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Whether the half-open interval `[start_time, end_time)` covers the
    /// given instant on the given date. A reservation ending exactly at the
    /// instant does not cover it, which is what allows back-to-back bookings.
    pub fn covers(&self, date: NaiveDate, instant: TimeOfDay) -> bool {
        self.date == date && self.start_time <= instant && instant < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "half".to_string(),
            name: "Half crew".to_string(),
            required_units: 3,
            duration_minutes: 120,
        }
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            note: None,
        }
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_confirmed_snapshots_product() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let reservation =
            Reservation::confirmed(date, time("10:00"), time("12:00"), &product(), customer());
        assert_eq!(reservation.product_id, "half");
        assert_eq!(reservation.product_name, "Half crew");
        assert_eq!(reservation.required_units, 3);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert!(reservation.is_active());
    }

    #[test]
    fn test_covers_half_open_interval() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let reservation =
            Reservation::confirmed(date, time("10:00"), time("12:00"), &product(), customer());

        assert!(reservation.covers(date, time("10:00")));
        assert!(reservation.covers(date, time("11:30")));
        // end boundary excluded: a booking ending at 12:00 does not contend
        // with one starting at 12:00
        assert!(!reservation.covers(date, time("12:00")));
        assert!(!reservation.covers(date, time("09:30")));

        let other_day = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        assert!(!reservation.covers(other_day, time("10:00")));
    }

    #[test]
    fn test_unique_ids() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let a = Reservation::confirmed(date, time("10:00"), time("12:00"), &product(), customer());
        let b = Reservation::confirmed(date, time("10:00"), time("12:00"), &product(), customer());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_roundtrip_with_note() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let mut reservation =
            Reservation::confirmed(date, time("10:00"), time("12:00"), &product(), customer());
        reservation.customer.note = Some("dock 4".to_string());
        let json = serde_json::to_string(&reservation).unwrap();
        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reservation);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}

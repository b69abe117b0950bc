//! High-level business logic over the repository and the engine.
//!
//! Handlers and bindings should go through these functions rather than
//! talking to the repository directly: this layer owns the transactional
//! read-validate-append sequencing for admissions and the validation
//! gate for settings changes.

pub mod booking;
pub mod calendar;
pub mod settings;


pub use booking::{
    admit_booking, cancel_booking, delete_booking, list_reservations, BookingError, BookingRequest,
};
pub use calendar::{day_availability, day_slots, DayAvailability, SlotStatus};
pub use settings::{add_holiday, get_settings, remove_holiday, update_settings, SettingsError};

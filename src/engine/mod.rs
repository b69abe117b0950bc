//! The slot-availability and booking-validity engine.
//!
//! Four cooperating pure functions layered bottom-up:
//!
//! 1. [`slots::slot_grid`] turns business-hour settings into the ordered
//!    sequence of bookable start-time offsets for a day.
//! 2. [`occupancy::occupancy_at`] returns how many capacity units are
//!    already consumed at one instant, given the reservation set.
//! 3. [`validate::check_booking`] decides admissibility for a candidate
//!    booking by checking every covered slot against capacity.
//! 4. [`availability::daily_availability_ratio`] summarizes remaining
//!    capacity across the whole grid for calendar-level hints.
//!
//! Every function here is a pure computation over borrowed snapshots of
//! (reservations, settings). The engine holds no state and does no locking;
//! the service layer is responsible for sequencing read-validate-append as
//! one logical transaction.

pub mod availability;
pub mod occupancy;
pub mod slots;
pub mod validate;


pub use availability::{classify_availability, daily_availability_ratio, AvailabilityLevel};
pub use occupancy::occupancy_at;
pub use slots::{slot_grid, Slot};
pub use validate::{check_booking, check_booking_date, RejectionReason};

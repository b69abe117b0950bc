//! # Pickdesk Backend
//!
//! Slot-availability and booking-validity engine for warehouse picking
//! reservations.
//!
//! Customers reserve a block of picking time against a shared daily capacity;
//! an operator manages capacity rules and existing bookings. This crate owns
//! the hard part: given a calendar of confirmed reservations, business-hour
//! and capacity settings, and a requested product (fixed duration + required
//! capacity units), it determines which start times are legal, computes
//! per-slot remaining capacity, and validates a new booking against all
//! overlapping bookings before it is admitted. The backend exposes a REST API
//! via Axum for the booking frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (time-of-day arithmetic, settings, product
//!   catalog, reservation records)
//! - [`engine`]: The pure availability engine (slot grid, occupancy,
//!   booking validation, availability aggregation)
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: High-level business logic (transactional booking
//!   admission, settings updates, calendar summaries)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The engine is stateless: all four of its operations are pure functions
//! over an immutable snapshot of (reservations, settings) passed by the
//! caller. The service layer owns the read-validate-append sequencing that
//! keeps two near-simultaneous bookings from jointly overshooting capacity.

pub mod db;
pub mod engine;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

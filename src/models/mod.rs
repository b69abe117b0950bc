//! Domain model types shared across the engine, services, and HTTP layers.

pub mod catalog;
pub mod reservation;
pub mod settings;
pub mod time;


pub use catalog::{Product, ProductCatalog};
pub use reservation::{CustomerInfo, Reservation, ReservationStatus};
pub use settings::{AvailabilityThresholds, ConfigError, Settings};
pub use time::TimeOfDay;

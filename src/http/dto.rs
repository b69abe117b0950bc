//! Data Transfer Objects for the HTTP API.
//!
//! Domain types that already derive Serialize/Deserialize are re-exported
//! directly; only request/response wrappers live here.

use serde::{Deserialize, Serialize};

pub use crate::engine::AvailabilityLevel;
pub use crate::models::{CustomerInfo, Product, Reservation, Settings, TimeOfDay};
pub use crate::services::calendar::{DayAvailability, SlotStatus};

/// Request body for creating a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// Requested date (YYYY-MM-DD)
    pub date: chrono::NaiveDate,
    /// Requested start time (HH:MM)
    pub start_time: TimeOfDay,
    /// Catalog product id
    pub product_id: String,
    /// Customer name
    pub name: String,
    /// Customer phone
    pub phone: String,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for the slot listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SlotsQuery {
    /// When set, each slot carries a bookability flag for this product
    #[serde(default)]
    pub product: Option<String>,
}

/// Query parameters for the reservation listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReservationsQuery {
    /// Restrict to one date
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
}

/// Slot listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub date: chrono::NaiveDate,
    pub slots: Vec<SlotStatus>,
    pub total: usize,
}

/// Product listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Reservation listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub reservations: Vec<Reservation>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}

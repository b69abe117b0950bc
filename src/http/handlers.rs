//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;

use super::dto::{
    CreateReservationRequest, HealthResponse, ProductListResponse, ReservationListResponse,
    ReservationsQuery, SlotListResponse, SlotsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{CustomerInfo, Reservation, Settings};
use crate::services;
use crate::services::booking::BookingRequest;
use crate::services::calendar::DayAvailability;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// The single implicit local zone: "today" for the past-date policy.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/products
///
/// The fixed product catalog.
pub async fn list_products(State(state): State<AppState>) -> HandlerResult<ProductListResponse> {
    let products = state.catalog.products().to_vec();
    let total = products.len();
    Ok(Json(ProductListResponse { products, total }))
}

// =============================================================================
// Calendar
// =============================================================================

/// GET /v1/days/{date}/slots
///
/// Slot grid for a date with per-slot occupancy. With `?product=<id>`, each
/// slot also carries a bookability flag for that product.
pub async fn get_day_slots(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Query(query): Query<SlotsQuery>,
) -> HandlerResult<SlotListResponse> {
    let product = match &query.product {
        Some(id) => Some(
            state
                .catalog
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("unknown product `{id}`")))?,
        ),
        None => None,
    };

    let slots = services::day_slots(state.repository.as_ref(), date, today(), product).await?;
    let total = slots.len();
    Ok(Json(SlotListResponse { date, slots, total }))
}

/// GET /v1/days/{date}/availability
///
/// Advisory remaining-capacity ratio and classification for a date. Never
/// used to gate admission.
pub async fn get_day_availability(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> HandlerResult<DayAvailability> {
    let summary = services::day_availability(state.repository.as_ref(), date).await?;
    Ok(Json(summary))
}

// =============================================================================
// Reservations
// =============================================================================

/// GET /v1/reservations
///
/// List reservations, optionally filtered by `?date=YYYY-MM-DD`.
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationsQuery>,
) -> HandlerResult<ReservationListResponse> {
    let reservations =
        services::list_reservations(state.repository.as_ref(), query.date).await?;
    let total = reservations.len();
    Ok(Json(ReservationListResponse {
        reservations,
        total,
    }))
}

/// POST /v1/reservations
///
/// Admit a booking. Returns 201 with the stored reservation, or 409 with
/// the structured rejection reason.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("customer name is required".to_string()));
    }
    if request.phone.trim().is_empty() {
        return Err(AppError::BadRequest(
            "customer phone is required".to_string(),
        ));
    }

    let booking = BookingRequest {
        date: request.date,
        start_time: request.start_time,
        product_id: request.product_id,
        customer: CustomerInfo {
            name: request.name,
            phone: request.phone,
            note: request.note,
        },
    };

    let reservation =
        services::admit_booking(state.repository.as_ref(), &state.catalog, &booking, today())
            .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// POST /v1/reservations/{id}/cancel
///
/// Cancel a reservation, releasing its capacity. The record is kept for
/// history.
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<Reservation> {
    let cancelled = services::cancel_booking(state.repository.as_ref(), id).await?;
    Ok(Json(cancelled))
}

/// DELETE /v1/reservations/{id}
///
/// Operator hard-delete: removes the record entirely.
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    services::delete_booking(state.repository.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Settings
// =============================================================================

/// GET /v1/settings
///
/// Current operator settings.
pub async fn get_settings(State(state): State<AppState>) -> HandlerResult<Settings> {
    let settings = services::get_settings(state.repository.as_ref()).await?;
    Ok(Json(settings))
}

/// PUT /v1/settings
///
/// Replace the operator settings. Invalid configuration is refused with
/// 422 and never clamped.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> HandlerResult<Settings> {
    let stored = services::update_settings(state.repository.as_ref(), settings).await?;
    Ok(Json(stored))
}

/// POST /v1/settings/holidays/{date}
///
/// Mark a date as a holiday. Existing bookings on the date are untouched.
pub async fn add_holiday(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> HandlerResult<Settings> {
    let settings = services::add_holiday(state.repository.as_ref(), date).await?;
    Ok(Json(settings))
}

/// DELETE /v1/settings/holidays/{date}
///
/// Remove a date from the holiday calendar.
pub async fn remove_holiday(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> HandlerResult<Settings> {
    let settings = services::remove_holiday(state.repository.as_ref(), date).await?;
    Ok(Json(settings))
}

//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Catalog
        .route("/products", get(handlers::list_products))
        // Calendar
        .route("/days/{date}/slots", get(handlers::get_day_slots))
        .route(
            "/days/{date}/availability",
            get(handlers::get_day_availability),
        )
        // Reservation lifecycle
        .route("/reservations", get(handlers::list_reservations))
        .route("/reservations", post(handlers::create_reservation))
        .route(
            "/reservations/{id}/cancel",
            post(handlers::cancel_reservation),
        )
        .route("/reservations/{id}", delete(handlers::delete_reservation))
        // Operator settings
        .route("/settings", get(handlers::get_settings))
        .route("/settings", put(handlers::update_settings))
        .route("/settings/holidays/{date}", post(handlers::add_holiday))
        .route(
            "/settings/holidays/{date}",
            delete(handlers::remove_holiday),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

//! Booking admission, cancellation, and administrative deletion.

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::db::repository::{RepositoryError, StoreRepository};
use crate::engine::{check_booking, check_booking_date, RejectionReason};
use crate::models::{CustomerInfo, ProductCatalog, Reservation, TimeOfDay};

/// How many times an admission retries after losing the optimistic version
/// race before giving up.
const ADMIT_RETRY_LIMIT: u32 = 3;

/// A candidate booking as submitted by the customer.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub product_id: String,
    pub customer: CustomerInfo,
}

/// Error type for booking operations.
///
/// `Rejected` is the expected negative outcome of validation; only the
/// other variants are faults.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("unknown product `{0}`")]
    UnknownProduct(String),

    #[error("booking rejected: {0}")]
    Rejected(RejectionReason),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Admit a booking: load a snapshot, validate against it, and append the
/// reservation — retrying the whole sequence when another writer commits
/// in between.
///
/// `today` is injected rather than read from the wall clock so the past-date
/// policy stays testable.
pub async fn admit_booking(
    repo: &dyn StoreRepository,
    catalog: &ProductCatalog,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<Reservation, BookingError> {
    let product = catalog
        .get(&request.product_id)
        .ok_or_else(|| BookingError::UnknownProduct(request.product_id.clone()))?;

    let mut attempts = 0;
    loop {
        // One atomic read: the snapshot version covers the settings the
        // validation runs under, so a settings change landing after this
        // point fails the insert below and sends us around again.
        let snapshot = repo.load_snapshot().await?;

        check_booking_date(request.date, today, &snapshot.settings)
            .map_err(BookingError::Rejected)?;
        let end_time = check_booking(
            request.date,
            request.start_time,
            product,
            &snapshot.reservations,
            &snapshot.settings,
        )
        .map_err(|reason| {
            debug!(
                date = %request.date,
                start = %request.start_time,
                product = %product.id,
                %reason,
                "booking rejected"
            );
            BookingError::Rejected(reason)
        })?;

        let reservation = Reservation::confirmed(
            request.date,
            request.start_time,
            end_time,
            product,
            request.customer.clone(),
        );

        match repo
            .insert_reservation(reservation.clone(), snapshot.version)
            .await
        {
            Ok(()) => {
                info!(
                    id = %reservation.id,
                    date = %reservation.date,
                    start = %reservation.start_time,
                    product = %reservation.product_id,
                    "booking admitted"
                );
                return Ok(reservation);
            }
            Err(err) if err.is_retryable() && attempts < ADMIT_RETRY_LIMIT => {
                attempts += 1;
                debug!(attempt = attempts, "admission lost version race, retrying");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Cancel a reservation, releasing its capacity while keeping the record.
pub async fn cancel_booking(
    repo: &dyn StoreRepository,
    id: Uuid,
) -> Result<Reservation, BookingError> {
    let cancelled = repo.cancel_reservation(id).await?;
    info!(%id, date = %cancelled.date, "booking cancelled");
    Ok(cancelled)
}

/// Operator hard-delete: remove the record entirely. The log line is the
/// only trace this override leaves.
pub async fn delete_booking(repo: &dyn StoreRepository, id: Uuid) -> Result<(), BookingError> {
    repo.delete_reservation(id).await?;
    warn!(%id, "reservation hard-deleted by operator");
    Ok(())
}

/// List reservations, optionally restricted to one date. Insertion order.
pub async fn list_reservations(
    repo: &dyn StoreRepository,
    date: Option<NaiveDate>,
) -> Result<Vec<Reservation>, BookingError> {
    match date {
        Some(date) => Ok(repo.reservations_on(date).await?),
        None => Ok(repo.load_reservations().await?.reservations),
    }
}

//! Repository trait: the abstract interface to the reservation store.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Reservation, Settings};

mod error;

pub use error::{RepositoryError, RepositoryResult};

/// A consistent snapshot of the reservation list plus the store version it
/// was taken at. The version is the token for optimistic writes.
#[derive(Debug, Clone)]
pub struct VersionedReservations {
    pub reservations: Vec<Reservation>,
    pub version: u64,
}

/// Everything a booking admission validates against, read atomically.
///
/// Settings and reservations come from the same lock acquisition, so the
/// version token covers both: a settings change landing after this snapshot
/// fails the optimistic write exactly like a competing reservation does.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub reservations: Vec<Reservation>,
    pub settings: Settings,
    pub version: u64,
}

/// Abstract interface over reservation and settings storage.
///
/// Implementations must keep the reservation list insertion-ordered, bump
/// the store version on every mutation, and guarantee read-after-write
/// consistency for a single writer. The version check on
/// [`insert_reservation`](Self::insert_reservation) is what serializes
/// concurrent admissions.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Load the full reservation list with its current version.
    async fn load_reservations(&self) -> RepositoryResult<VersionedReservations>;

    /// Load reservations and settings together under one consistent read.
    /// This is what admission validates against; reading the two documents
    /// separately would let a settings change slip between them unnoticed
    /// by the version check.
    async fn load_snapshot(&self) -> RepositoryResult<StoreSnapshot>;

    /// Append a reservation, provided the store version still matches the
    /// snapshot the caller validated against. Fails with
    /// [`RepositoryError::VersionConflict`] otherwise.
    async fn insert_reservation(
        &self,
        reservation: Reservation,
        expected_version: u64,
    ) -> RepositoryResult<()>;

    /// Transition a reservation to cancelled, releasing its capacity while
    /// keeping the record for history. Idempotent: cancelling an already
    /// cancelled reservation is a no-op. Returns the updated record.
    async fn cancel_reservation(&self, id: Uuid) -> RepositoryResult<Reservation>;

    /// Administrative hard-delete: remove the record entirely. Distinct
    /// from cancellation.
    async fn delete_reservation(&self, id: Uuid) -> RepositoryResult<()>;

    /// Reservations for one date, in insertion order.
    async fn reservations_on(&self, date: NaiveDate) -> RepositoryResult<Vec<Reservation>>;

    /// Load the current settings document.
    async fn load_settings(&self) -> RepositoryResult<Settings>;

    /// Replace the settings document. The caller validates first.
    async fn save_settings(&self, settings: Settings) -> RepositoryResult<()>;

    /// Whether the store is reachable and consistent.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

//! In-memory repository with an optional JSON-file snapshot.
//!
//! The whole store is one document with two fixed keys — `"reservations"`
//! (insertion-ordered list) and `"settings"` — plus the store version. When
//! a backing file is configured, every mutation is persisted before it is
//! visible in memory: a failed save never leaves the in-memory state ahead
//! of the last-persisted snapshot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repository::{
    RepositoryError, RepositoryResult, StoreRepository, StoreSnapshot, VersionedReservations,
};
use crate::models::{Reservation, ReservationStatus, Settings};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreState {
    reservations: Vec<Reservation>,
    settings: Settings,
    #[serde(default)]
    version: u64,
}

impl StoreState {
    fn new(settings: Settings) -> Self {
        Self {
            reservations: Vec::new(),
            settings,
            version: 0,
        }
    }
}

/// In-memory implementation of [`StoreRepository`] for local deployments
/// and tests.
pub struct LocalRepository {
    state: RwLock<StoreState>,
    path: Option<PathBuf>,
}

impl LocalRepository {
    /// Create an empty in-memory repository with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an in-memory repository seeded with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            state: RwLock::new(StoreState::new(settings)),
            path: None,
        }
    }

    /// Open a file-backed repository, loading the existing document when
    /// the file is present.
    pub fn with_path(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            StoreState::new(Settings::default())
        };
        Ok(Self {
            state: RwLock::new(state),
            path: Some(path),
        })
    }

    fn persist(path: &Path, state: &StoreState) -> RepositoryResult<()> {
        let text = serde_json::to_string_pretty(state)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Persist `next` (when file-backed) and only then make it visible.
    fn commit(&self, guard: &mut StoreState, next: StoreState) -> RepositoryResult<()> {
        if let Some(path) = &self.path {
            Self::persist(path, &next)?;
        }
        *guard = next;
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreRepository for LocalRepository {
    async fn load_reservations(&self) -> RepositoryResult<VersionedReservations> {
        let state = self.state.read();
        Ok(VersionedReservations {
            reservations: state.reservations.clone(),
            version: state.version,
        })
    }

    async fn load_snapshot(&self) -> RepositoryResult<StoreSnapshot> {
        let state = self.state.read();
        Ok(StoreSnapshot {
            reservations: state.reservations.clone(),
            settings: state.settings.clone(),
            version: state.version,
        })
    }

    async fn insert_reservation(
        &self,
        reservation: Reservation,
        expected_version: u64,
    ) -> RepositoryResult<()> {
        let mut guard = self.state.write();
        if guard.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                expected: expected_version,
                actual: guard.version,
            });
        }
        let mut next = guard.clone();
        next.reservations.push(reservation);
        next.version += 1;
        self.commit(&mut guard, next)
    }

    async fn cancel_reservation(&self, id: Uuid) -> RepositoryResult<Reservation> {
        let mut guard = self.state.write();
        let index = guard
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
        if guard.reservations[index].status == ReservationStatus::Cancelled {
            return Ok(guard.reservations[index].clone());
        }
        let mut next = guard.clone();
        next.reservations[index].status = ReservationStatus::Cancelled;
        next.version += 1;
        let cancelled = next.reservations[index].clone();
        self.commit(&mut guard, next)?;
        Ok(cancelled)
    }

    async fn delete_reservation(&self, id: Uuid) -> RepositoryResult<()> {
        let mut guard = self.state.write();
        let index = guard
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
        let mut next = guard.clone();
        next.reservations.remove(index);
        next.version += 1;
        self.commit(&mut guard, next)
    }

    async fn reservations_on(&self, date: NaiveDate) -> RepositoryResult<Vec<Reservation>> {
        let state = self.state.read();
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn load_settings(&self) -> RepositoryResult<Settings> {
        Ok(self.state.read().settings.clone())
    }

    async fn save_settings(&self, settings: Settings) -> RepositoryResult<()> {
        let mut guard = self.state.write();
        let mut next = guard.clone();
        next.settings = settings;
        next.version += 1;
        self.commit(&mut guard, next)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerInfo, Product, TimeOfDay};

    fn reservation(date: NaiveDate) -> Reservation {
        let product = Product {
            id: "half".to_string(),
            name: "Half crew".to_string(),
            required_units: 3,
            duration_minutes: 120,
        };
        let start: TimeOfDay = "10:00".parse().unwrap();
        let end: TimeOfDay = "12:00".parse().unwrap();
        let customer = CustomerInfo {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            note: None,
        };
        Reservation::confirmed(date, start, end, &product, customer)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_load() {
        let repo = LocalRepository::new();
        let snapshot = repo.load_reservations().await.unwrap();
        assert_eq!(snapshot.version, 0);
        assert!(snapshot.reservations.is_empty());

        repo.insert_reservation(reservation(date()), snapshot.version)
            .await
            .unwrap();
        let after = repo.load_reservations().await.unwrap();
        assert_eq!(after.version, 1);
        assert_eq!(after.reservations.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_with_stale_version_conflicts() {
        let repo = LocalRepository::new();
        repo.insert_reservation(reservation(date()), 0).await.unwrap();
        let err = repo
            .insert_reservation(reservation(date()), 0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::VersionConflict {
                expected: 0,
                actual: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent_and_keeps_record() {
        let repo = LocalRepository::new();
        let record = reservation(date());
        let id = record.id;
        repo.insert_reservation(record, 0).await.unwrap();

        let cancelled = repo.cancel_reservation(id).await.unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        let version = repo.load_reservations().await.unwrap().version;

        // second cancel: no-op, no version bump
        let again = repo.cancel_reservation(id).await.unwrap();
        assert_eq!(again.status, ReservationStatus::Cancelled);
        assert_eq!(repo.load_reservations().await.unwrap().version, version);

        // record still in the list for history
        assert_eq!(repo.load_reservations().await.unwrap().reservations.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = LocalRepository::new();
        let record = reservation(date());
        let id = record.id;
        repo.insert_reservation(record, 0).await.unwrap();
        repo.delete_reservation(id).await.unwrap();
        assert!(repo.load_reservations().await.unwrap().reservations.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_missing_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.cancel_reservation(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reservations_on_filters_by_date() {
        let repo = LocalRepository::new();
        repo.insert_reservation(reservation(date()), 0).await.unwrap();
        let other_day = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        repo.insert_reservation(reservation(other_day), 1)
            .await
            .unwrap();

        assert_eq!(repo.reservations_on(date()).await.unwrap().len(), 1);
        assert_eq!(repo.reservations_on(other_day).await.unwrap().len(), 1);
        let empty_day = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        assert!(repo.reservations_on(empty_day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_reads_both_documents_at_one_version() {
        let repo = LocalRepository::new();
        repo.insert_reservation(reservation(date()), 0).await.unwrap();

        let snapshot = repo.load_snapshot().await.unwrap();
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.reservations.len(), 1);
        assert_eq!(snapshot.settings, Settings::default());
    }

    #[tokio::test]
    async fn test_settings_write_invalidates_snapshot_version() {
        let repo = LocalRepository::new();
        let snapshot = repo.load_snapshot().await.unwrap();

        let mut settings = snapshot.settings.clone();
        settings.max_capacity_units = 3;
        repo.save_settings(settings).await.unwrap();

        // an insert validated against the pre-write snapshot must conflict
        let err = repo
            .insert_reservation(reservation(date()), snapshot.version)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::VersionConflict { .. }));
    }

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let repo = LocalRepository::new();
        let mut settings = repo.load_settings().await.unwrap();
        settings.max_capacity_units = 10;
        repo.save_settings(settings.clone()).await.unwrap();
        assert_eq!(repo.load_settings().await.unwrap(), settings);
    }
}

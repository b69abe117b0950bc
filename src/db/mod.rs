//! Persistence layer for reservation and settings documents.
//!
//! The store holds two logical JSON documents — the insertion-ordered
//! reservation list and the settings record — behind the Repository pattern
//! so storage backends can be swapped without touching the service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Transactional read-validate-append                   │
//! │  - Settings validation                                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │   (in-memory, optional JSON-file snapshot)    │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Concurrency contract
//!
//! The engine validates against an immutable snapshot, so two
//! near-simultaneous bookings could both pass validation against stale data
//! and jointly overshoot capacity. The repository closes that race with an
//! optimistic version check: every mutation bumps a store version, and
//! [`repository::StoreRepository::insert_reservation`] only commits when the
//! caller's snapshot version still matches. Callers retry on
//! [`repository::RepositoryError::VersionConflict`].

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    RepositoryError, RepositoryResult, StoreRepository, StoreSnapshot, VersionedReservations,
};

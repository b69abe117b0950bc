//! Repository implementations module.
//!
//! Currently a single backend: `local`, an in-memory store with an optional
//! JSON-file snapshot, suitable for development and the single-process
//! deployment this service targets.
pub mod local;

pub use local::LocalRepository;

//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::StoreRepository;
use crate::models::ProductCatalog;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for reservation and settings storage
    pub repository: Arc<dyn StoreRepository>,
    /// Fixed product catalog loaded at startup
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(repository: Arc<dyn StoreRepository>, catalog: Arc<ProductCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

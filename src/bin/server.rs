//! Pickdesk HTTP Server Binary
//!
//! Main entry point for the picking-reservation REST API server. It loads
//! the product catalog, opens the reservation store, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory store (default)
//! cargo run --bin pickdesk-server
//!
//! # Run with a JSON-file-backed store
//! DATA_PATH=/var/lib/pickdesk/store.json cargo run --bin pickdesk-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: JSON store file (default: in-memory only)
//! - `PRODUCTS_PATH`: Product catalog TOML (default: built-in catalog)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pickdesk::db::repositories::LocalRepository;
use pickdesk::http::{create_router, AppState};
use pickdesk::models::ProductCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Pickdesk HTTP Server");

    // Product catalog: TOML manifest or built-in defaults
    let catalog = match env::var("PRODUCTS_PATH") {
        Ok(path) => {
            info!(%path, "Loading product catalog");
            ProductCatalog::load(std::path::Path::new(&path))?
        }
        Err(_) => ProductCatalog::builtin(),
    };

    // Reservation store: file-backed when DATA_PATH is set
    let repository = match env::var("DATA_PATH") {
        Ok(path) => {
            info!(%path, "Opening file-backed reservation store");
            LocalRepository::with_path(path)?
        }
        Err(_) => LocalRepository::new(),
    };
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(Arc::new(repository), Arc::new(catalog));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

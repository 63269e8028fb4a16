//! # Pizzeria API
//!
//! HTTP/JSON server over the pizzeria database.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Routes (/api)                              │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐  ┌───────────────┐ │
//! │  │  items               │  │  invoices            │  │  health       │ │
//! │  │                      │  │                      │  │               │ │
//! │  │ • GET    /items      │  │ • GET  /invoices     │  │ • GET /health │ │
//! │  │ • POST   /items      │  │ • POST /invoices     │  │               │ │
//! │  │ • PUT    /items/{id} │  │                      │  │               │ │
//! │  │ • DELETE /items/{id} │  │                      │  │               │ │
//! │  └──────────┬───────────┘  └──────────┬───────────┘  └───────┬───────┘ │
//! │             └─────────────────────────┼──────────────────────┘         │
//! │                                       ▼                                 │
//! │                        AppState { Database, InvoiceWriteMode }          │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                              SQLite (pizzeria-db)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - bind address (default: 0.0.0.0)
//! - `HTTP_PORT` - bind port (default: 8080)
//! - `DATABASE_PATH` - SQLite file (default: pizza_shop.db)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 5)
//! - `INVOICE_ATOMIC` - create invoices in one transaction (default: true)
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::router;

use pizzeria_db::{Database, InvoiceWriteMode};

/// Shared application state.
///
/// Cloned into every handler; `Database` is a pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub write_mode: InvoiceWriteMode,
}

impl AppState {
    pub fn new(db: Database, write_mode: InvoiceWriteMode) -> Self {
        AppState { db, write_mode }
    }
}

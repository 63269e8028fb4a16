//! # pizzeria-db: Database Layer for Pizzeria POS
//!
//! Database access for the pizza shop backend: SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pizzeria POS Data Flow                            │
//! │                                                                         │
//! │  HTTP handler (GET /api/invoices)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pizzeria-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │   │   │
//! │  │   │               │    │ ItemRepo       │   │              │   │   │
//! │  │   │ SqlitePool    │◄───│ InvoiceRepo    │   │ 001_initial  │   │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (pizza_shop.db)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pizzeria_db::{Database, DbConfig};
//!
//! let db = Database::connect(DbConfig::new("pizza_shop.db")).await?;
//! let menu = db.items().list().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::invoice::{InvoiceRepository, InvoiceWriteMode};
pub use repository::item::ItemRepository;

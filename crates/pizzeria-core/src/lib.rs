//! # pizzeria-core: Domain Types for Pizzeria POS
//!
//! The data a pizza shop's till works with: menu items, invoices, and
//! the invoice lines tying them together. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizzeria POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │         Item management ──► Invoice management                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON (/api/...)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pizzeria-core (THIS CRATE) ★                      │   │
//! │  │     Item • NewItem • Invoice • InvoiceItem • NewInvoice • Money │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pizzeria-db (SQLite repositories)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Invoice, ...)
//! - [`money`] - Money type: integer cents, decimal on the wire
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{Money, NewItem};
//!
//! let item: NewItem = serde_json::from_str(
//!     r#"{"name": "Pepperoni Pizza", "price": 12.5, "type": "pizza"}"#,
//! ).unwrap();
//!
//! assert_eq!(item.price, Money::from_cents(1250));
//! ```

pub mod error;
pub mod money;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

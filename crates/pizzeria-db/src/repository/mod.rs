//! # Repository Module
//!
//! Database repository implementations for Pizzeria POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.items().list()                                              │
//! │       ▼                                                                 │
//! │  ItemRepository / InvoiceRepository                                    │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Menu item CRUD
//! - [`InvoiceRepository`](invoice::InvoiceRepository) - Invoices and their lines

pub mod invoice;
pub mod item;

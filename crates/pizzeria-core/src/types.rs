//! # Domain Types
//!
//! Core domain types used throughout Pizzeria POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │      Item       │        │     Invoice     │                         │
//! │  │  ─────────────  │        │  ─────────────  │                         │
//! │  │  id             │◄──┐    │  id             │                         │
//! │  │  name           │   │    │  customer_name  │                         │
//! │  │  price          │   │    │  total_amount   │                         │
//! │  │  type           │   │    │  date           │                         │
//! │  └─────────────────┘   │    │  items ─────────┼──┐                      │
//! │                        │    └─────────────────┘  │                      │
//! │                        │    ┌─────────────────┐  │                      │
//! │                        │    │   InvoiceItem   │◄─┘                      │
//! │                        └────┤  item_id        │                         │
//! │                             │  quantity       │                         │
//! │                             │  item_name  (ro)│                         │
//! │                             │  price      (ro)│                         │
//! │                             └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Shapes vs Write Shapes
//! `Item` and `Invoice` are what the API returns. `NewItem` and `NewInvoice`
//! are what it accepts: they carry no id, and invoice lines carry no
//! denormalized name/price.
//!
//! ## Lenient Binding
//! Write shapes accept missing fields and `null` as zero values (`""`, `0`,
//! `Money::zero()`, `[]`). Only broken JSON or a value of the wrong JSON
//! type is rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A menu entry: a pizza, a side, a drink, a cake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Item {
    /// Store-assigned identifier.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "item_id"))]
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, e.g. "Pepperoni Pizza".
    pub name: String,

    /// Unit price.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,

    /// Category, e.g. "pizza", "cake".
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub item_type: String,
}

/// Reads `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NewItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub price: Money,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub item_type: String,
}

impl NewItem {
    /// Attaches a store-assigned id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            item_type: self.item_type,
        }
    }
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A line on an invoice.
///
/// `item_name` and `price` are read from the current item row when the
/// invoice is listed. They are not a snapshot: editing an item changes how
/// past invoices render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InvoiceItem {
    #[ts(type = "number")]
    pub item_id: i64,

    #[ts(type = "number")]
    pub quantity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub item_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price: Option<Money>,
}

/// A line in the body of `POST /invoices`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NewInvoiceItem {
    #[serde(deserialize_with = "null_as_default")]
    #[ts(type = "number")]
    pub item_id: i64,

    #[serde(deserialize_with = "null_as_default")]
    #[ts(type = "number")]
    pub quantity: i64,
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer order.
///
/// ## Note on `total_amount`
/// The total is whatever the client sent. It is never recomputed from
/// the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Invoice {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "invoice_id"))]
    #[ts(type = "number")]
    pub id: i64,

    pub customer_name: String,

    #[cfg_attr(feature = "sqlx", sqlx(rename = "total_amount_cents"))]
    pub total_amount: Money,

    /// When the invoice was created (UTC).
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub items: Vec<InvoiceItem>,
}

/// Body of `POST /invoices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NewInvoice {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: Money,

    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<NewInvoiceItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================

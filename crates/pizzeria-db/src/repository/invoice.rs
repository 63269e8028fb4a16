//! # Invoice Repository
//!
//! Database operations for invoices and their lines.
//!
//! ## Creating an Invoice
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(&NewInvoice, mode)                                              │
//! │                                                                         │
//! │  1. INSERT INTO invoices ...            → invoice_id                    │
//! │  2. INSERT INTO invoice_items ... (line 1)                              │
//! │  3. INSERT INTO invoice_items ... (line 2)     ✗ fails                  │
//! │  4. (line 3 never attempted)                                            │
//! │                                                                         │
//! │  InvoiceWriteMode::Atomic      one transaction: 1 and 2 roll back       │
//! │  InvoiceWriteMode::Sequential  autocommit: invoice + line 1 remain      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Listing Invoices
//! Two queries regardless of invoice count: all invoices, then all lines
//! joined to their items, grouped by invoice id in memory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use pizzeria_core::{Invoice, InvoiceItem, NewInvoice};

/// How `create` groups its inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceWriteMode {
    /// Invoice row and all lines commit together or not at all.
    #[default]
    Atomic,
    /// Every insert commits on its own. A failing line leaves the invoice
    /// row and the lines before it in place.
    Sequential,
}

/// A line row tagged with the invoice it belongs to.
#[derive(Debug, sqlx::FromRow)]
struct InvoiceLineRow {
    invoice_id: i64,
    #[sqlx(flatten)]
    line: InvoiceItem,
}

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Lists every invoice with its lines.
    ///
    /// Each line carries the current name and price of its item.
    pub async fn list(&self) -> DbResult<Vec<Invoice>> {
        let mut invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT invoice_id, customer_name, total_amount_cents, date
            FROM invoices
            ORDER BY invoice_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, InvoiceLineRow>(
            r#"
            SELECT
                ii.invoice_id,
                ii.item_id,
                ii.quantity,
                i.name AS item_name,
                i.price_cents AS price
            FROM invoice_items ii
            JOIN items i ON ii.item_id = i.item_id
            ORDER BY ii.invoice_id, ii.rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut lines_by_invoice: HashMap<i64, Vec<InvoiceItem>> = HashMap::new();
        for row in rows {
            lines_by_invoice
                .entry(row.invoice_id)
                .or_default()
                .push(row.line);
        }

        for invoice in &mut invoices {
            invoice.items = lines_by_invoice.remove(&invoice.id).unwrap_or_default();
        }

        debug!(count = invoices.len(), "Listed invoices");
        Ok(invoices)
    }

    /// Gets one invoice with its lines.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT invoice_id, customer_name, total_amount_cents, date
            FROM invoices
            WHERE invoice_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut invoice) = invoice else {
            return Ok(None);
        };

        invoice.items = sqlx::query_as::<_, InvoiceItem>(
            r#"
            SELECT
                ii.item_id,
                ii.quantity,
                i.name AS item_name,
                i.price_cents AS price
            FROM invoice_items ii
            JOIN items i ON ii.item_id = i.item_id
            WHERE ii.invoice_id = ?1
            ORDER BY ii.rowid
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(invoice))
    }

    /// Creates an invoice and its lines, stamped with the current time.
    ///
    /// ## Returns
    /// The new invoice id.
    ///
    /// ## Errors
    /// The first failing statement's error. Lines after it are not
    /// attempted; what stays committed depends on `mode`.
    pub async fn create(&self, invoice: &NewInvoice, mode: InvoiceWriteMode) -> DbResult<i64> {
        debug!(
            customer = %invoice.customer_name,
            total = %invoice.total_amount,
            lines = invoice.items.len(),
            ?mode,
            "Creating invoice"
        );

        let date = Utc::now();

        match mode {
            InvoiceWriteMode::Atomic => {
                let mut tx = self
                    .pool
                    .begin()
                    .await
                    .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

                // Dropping `tx` on the error path rolls everything back
                let invoice_id = insert_invoice(&mut *tx, invoice, date).await?;

                tx.commit()
                    .await
                    .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

                Ok(invoice_id)
            }
            InvoiceWriteMode::Sequential => {
                let mut conn = self.pool.acquire().await?;

                let invoice_id = insert_invoice(&mut *conn, invoice, date).await.inspect_err(|e| {
                    warn!(error = %e, "Invoice insert failed outside a transaction, earlier rows stay committed");
                })?;

                Ok(invoice_id)
            }
        }
    }
}

/// Inserts the invoice row, then each line, stopping at the first error.
async fn insert_invoice(
    conn: &mut SqliteConnection,
    invoice: &NewInvoice,
    date: DateTime<Utc>,
) -> DbResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO invoices (customer_name, total_amount_cents, date)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(&invoice.customer_name)
    .bind(invoice.total_amount)
    .bind(date)
    .execute(&mut *conn)
    .await?;

    let invoice_id = result.last_insert_rowid();

    for line in &invoice.items {
        debug!(invoice_id, item_id = line.item_id, quantity = line.quantity, "Adding invoice line");

        sqlx::query(
            r#"
            INSERT INTO invoice_items (invoice_id, item_id, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(invoice_id)
        .bind(line.item_id)
        .bind(line.quantity)
        .execute(&mut *conn)
        .await?;
    }

    Ok(invoice_id)
}

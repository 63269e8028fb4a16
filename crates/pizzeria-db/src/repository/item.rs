//! # Item Repository
//!
//! Database operations for menu items.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list()            SELECT ... FROM items ORDER BY item_id              │
//! │  insert(&NewItem)  INSERT ... → Item with last_insert_rowid()          │
//! │  update(id, ..)    UPDATE ... WHERE item_id = ?  → rows affected       │
//! │  delete(id)        DELETE ... WHERE item_id = ?  → rows affected       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `update` and `delete` report how many rows they touched but never treat
//! zero as an error; callers decide what a missing row means.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pizzeria_core::{Item, NewItem};

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let created = repo.insert(&new_item).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists every item in row order.
    ///
    /// Returns an empty vector when the menu is empty.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT item_id, name, price_cents, type
            FROM items
            ORDER BY item_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT item_id, name, price_cents, type
            FROM items
            WHERE item_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item.
    ///
    /// ## Returns
    /// The stored item, carrying the id SQLite assigned.
    pub async fn insert(&self, new_item: &NewItem) -> DbResult<Item> {
        debug!(name = %new_item.name, price = %new_item.price, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (name, price_cents, type)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new_item.name)
        .bind(new_item.price)
        .bind(&new_item.item_type)
        .execute(&self.pool)
        .await?;

        Ok(new_item.clone().into_item(result.last_insert_rowid()))
    }

    /// Overwrites name, price and type of the item with the given id.
    ///
    /// ## Returns
    /// Number of rows affected: `0` when no such item exists.
    pub async fn update(&self, id: i64, item: &NewItem) -> DbResult<u64> {
        debug!(id = %id, name = %item.name, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items SET
                name = ?2,
                price_cents = ?3,
                type = ?4
            WHERE item_id = ?1
            "#,
        )
        .bind(id)
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.item_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the item with the given id.
    ///
    /// ## Returns
    /// Number of rows affected: `0` when no such item exists.
    ///
    /// ## Errors
    /// `DbError::ForeignKeyViolation` when invoice lines still reference it.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id = %id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE item_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts items (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig, DbError};
    use pizzeria_core::Money;

    fn new_item(name: &str, cents: i64, item_type: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            price: Money::from_cents(cents),
            item_type: item_type.to_string(),
        }
    }

    async fn test_db() -> Database {
        Database::connect(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = test_db().await;
        assert!(db.items().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let db = test_db().await;
        let repo = db.items();

        let first = repo.insert(&new_item("Margherita", 1099, "pizza")).await.unwrap();
        let second = repo.insert(&new_item("Cola", 250, "drink")).await.unwrap();

        assert_ne!(first.id, second.id);

        let items = repo.list().await.unwrap();
        assert_eq!(items, vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let db = test_db().await;
        let repo = db.items();

        let first = repo.insert(&new_item("Calzone", 1300, "pizza")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.insert(&new_item("Calzone", 1300, "pizza")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_target_row() {
        let db = test_db().await;
        let repo = db.items();

        let target = repo.insert(&new_item("Hawaiian", 1200, "pizza")).await.unwrap();
        let other = repo.insert(&new_item("Brownie", 400, "cake")).await.unwrap();

        let affected = repo
            .update(target.id, &new_item("Hawaiian XL", 1650, "pizza-xl"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let updated = repo.get_by_id(target.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Hawaiian XL");
        assert_eq!(updated.price.cents(), 1650);
        assert_eq!(updated.item_type, "pizza-xl");

        assert_eq!(repo.get_by_id(other.id).await.unwrap(), Some(other));
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let db = test_db().await;
        let repo = db.items();
        let existing = repo.insert(&new_item("Garlic Bread", 450, "side")).await.unwrap();

        let affected = repo.update(9999, &new_item("Ghost", 1, "none")).await.unwrap();

        assert_eq!(affected, 0);
        assert_eq!(repo.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let repo = db.items();

        let doomed = repo.insert(&new_item("Anchovy", 1100, "pizza")).await.unwrap();
        let kept = repo.insert(&new_item("Lemonade", 300, "drink")).await.unwrap();

        assert_eq!(repo.delete(doomed.id).await.unwrap(), 1);
        assert_eq!(repo.list().await.unwrap(), vec![kept]);
        assert_eq!(repo.delete(doomed.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_referenced_item_is_rejected() {
        let db = test_db().await;
        let item = db.items().insert(&new_item("Pepperoni", 1250, "pizza")).await.unwrap();

        let invoice_id = sqlx::query(
            "INSERT INTO invoices (customer_name, total_amount_cents, date) VALUES ('Ada', 1250, '2026-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid();

        sqlx::query("INSERT INTO invoice_items (invoice_id, item_id, quantity) VALUES (?1, ?2, 1)")
            .bind(invoice_id)
            .bind(item.id)
            .execute(db.pool())
            .await
            .unwrap();

        let result = db.items().delete(item.id).await;
        assert!(matches!(result, Err(DbError::ForeignKeyViolation { .. })));
        assert_eq!(db.items().count().await.unwrap(), 1);
    }
}

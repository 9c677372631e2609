//! # Cart Item Repository
//!
//! Database operations for per-user shopping-cart lines.
//!
//! ## Snapshot Pattern
//! A cart line stores the book's title and price as they were when the
//! line was created. Catalog edits after that point do not touch existing
//! carts; the add/remove state machine lives in the service layer, this
//! repository only provides the primitives.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::CartItem;

/// Repository for cart line database operations.
#[derive(Debug, Clone)]
pub struct CartItemRepository {
    pool: SqlitePool,
}

impl CartItemRepository {
    /// Creates a new CartItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartItemRepository { pool }
    }

    /// Lists a user's cart lines in the order they were first added.
    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<CartItem>> {
        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT user_id, isbn, title, price_cents, quantity, added_at
            FROM cart_items
            WHERE user_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets one cart line by its composite key.
    pub async fn find(&self, user_id: i64, isbn: &str) -> DbResult<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT user_id, isbn, title, price_cents, quantity, added_at
            FROM cart_items
            WHERE user_id = ?1 AND isbn = ?2
            "#,
        )
        .bind(user_id)
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new cart line.
    ///
    /// Fails with a unique violation if the `(user_id, isbn)` pair already
    /// exists - callers bump the quantity of the existing line instead.
    pub async fn insert(&self, item: &CartItem) -> DbResult<()> {
        debug!(user_id = item.user_id, isbn = %item.isbn, "Inserting cart line");

        sqlx::query(
            r#"
            INSERT INTO cart_items (user_id, isbn, title, price_cents, quantity, added_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(item.user_id)
        .bind(&item.isbn)
        .bind(&item.title)
        .bind(item.price_cents)
        .bind(item.quantity)
        .bind(item.added_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Sets the quantity of an existing cart line.
    ///
    /// Quantity must stay positive; a line going to zero is deleted via
    /// [`CartItemRepository::delete`] instead.
    pub async fn set_quantity(&self, user_id: i64, isbn: &str, quantity: i64) -> DbResult<()> {
        debug!(user_id, isbn = %isbn, quantity, "Updating cart line quantity");

        let result = sqlx::query(
            "UPDATE cart_items SET quantity = ?3 WHERE user_id = ?1 AND isbn = ?2",
        )
        .bind(user_id)
        .bind(isbn)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("CartItem", isbn));
        }

        Ok(())
    }

    /// Deletes a cart line.
    ///
    /// ## Returns
    /// `true` if a line was removed, `false` if the pair was absent.
    /// Absence is not an error here - removing from an empty cart is a
    /// no-op at the service level.
    pub async fn delete(&self, user_id: i64, isbn: &str) -> DbResult<bool> {
        debug!(user_id, isbn = %isbn, "Deleting cart line");

        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ?1 AND isbn = ?2")
            .bind(user_id)
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use biblio_core::Book;
    use chrono::Utc;

    async fn test_db_with_book(isbn: &str) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let now = Utc::now();
        db.books()
            .save(&Book {
                isbn: isbn.to_string(),
                title: "Test Book".to_string(),
                description: None,
                price_cents: 2999,
                genre: "Testing".to_string(),
                year_published: Some(2023),
                copies_sold: 0,
                publisher_id: None,
                author_id: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        db
    }

    fn line(user_id: i64, isbn: &str, quantity: i64) -> CartItem {
        CartItem {
            user_id,
            isbn: isbn.to_string(),
            title: "Test Book".to_string(),
            price_cents: 2999,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_find_and_quantity_update() {
        let db = test_db_with_book("9780123456789").await;
        let repo = db.cart_items();

        repo.insert(&line(1, "9780123456789", 1)).await.unwrap();
        let found = repo.find(1, "9780123456789").await.unwrap().unwrap();
        assert_eq!(found.quantity, 1);
        assert_eq!(found.price_cents, 2999);

        repo.set_quantity(1, "9780123456789", 2).await.unwrap();
        let found = repo.find(1, "9780123456789").await.unwrap().unwrap();
        assert_eq!(found.quantity, 2);
    }

    #[tokio::test]
    async fn test_carts_are_per_user() {
        let db = test_db_with_book("9780123456789").await;
        let repo = db.cart_items();

        repo.insert(&line(1, "9780123456789", 1)).await.unwrap();
        repo.insert(&line(2, "9780123456789", 3)).await.unwrap();

        assert_eq!(repo.list_for_user(1).await.unwrap().len(), 1);
        assert_eq!(repo.list_for_user(2).await.unwrap()[0].quantity, 3);
        assert!(repo.list_for_user(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let db = test_db_with_book("9780123456789").await;
        let repo = db.cart_items();

        repo.insert(&line(1, "9780123456789", 1)).await.unwrap();
        assert!(repo.delete(1, "9780123456789").await.unwrap());
        assert!(!repo.delete(1, "9780123456789").await.unwrap());
    }

    #[tokio::test]
    async fn test_cart_line_requires_catalog_book() {
        let db = test_db_with_book("9780123456789").await;
        let repo = db.cart_items();

        let err = repo.insert(&line(1, "0000000000000", 1)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}

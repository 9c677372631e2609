//! # Publisher Repository
//!
//! Database operations for publishers. Publishers use store-generated
//! integer ids (unlike books, which are keyed by ISBN).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::Publisher;

/// Repository for publisher database operations.
#[derive(Debug, Clone)]
pub struct PublisherRepository {
    pool: SqlitePool,
}

impl PublisherRepository {
    /// Creates a new PublisherRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PublisherRepository { pool }
    }

    /// Lists all publishers, in id order.
    pub async fn list_all(&self) -> DbResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, created_at, updated_at FROM publishers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Gets a publisher by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, created_at, updated_at FROM publishers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(publisher)
    }

    /// Inserts a new publisher and returns it with its generated id.
    pub async fn insert(&self, name: &str, address: Option<&str>) -> DbResult<Publisher> {
        debug!(name = %name, "Inserting publisher");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO publishers (name, address, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Publisher {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            address: address.map(str::to_string),
            created_at: now,
            updated_at: now,
        })
    }

    /// Deletes a publisher by id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Publisher", id.to_string()));
        }

        Ok(())
    }
}

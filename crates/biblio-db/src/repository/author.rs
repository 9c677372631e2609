//! # Author Repository
//!
//! Database operations for authors. Same id scheme as publishers:
//! store-generated integers referenced by `books.author_id`.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::Author;

/// Repository for author database operations.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    /// Creates a new AuthorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AuthorRepository { pool }
    }

    /// Lists all authors, in id order.
    pub async fn list_all(&self) -> DbResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, created_at, updated_at FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Gets an author by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, created_at, updated_at FROM authors WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Inserts a new author and returns it with its generated id.
    pub async fn insert(&self, name: &str) -> DbResult<Author> {
        debug!(name = %name, "Inserting author");

        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO authors (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Author {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Deletes an author by id.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Author", id.to_string()));
        }

        Ok(())
    }
}

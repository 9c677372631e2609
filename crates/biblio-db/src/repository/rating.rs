//! # Rating Repository
//!
//! Rating records and the derived per-book averages.
//!
//! The average is computed in SQL: an inner join means a book with zero
//! ratings simply never appears in the aggregate (its mean is undefined,
//! not zero).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use biblio_core::BookRating;

/// Repository for rating database operations.
#[derive(Debug, Clone)]
pub struct RatingRepository {
    pool: SqlitePool,
}

impl RatingRepository {
    /// Creates a new RatingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RatingRepository { pool }
    }

    /// Records a single rating for a book.
    pub async fn insert(&self, isbn: &str, rating: i64) -> DbResult<()> {
        debug!(isbn = %isbn, rating, "Inserting rating");

        sqlx::query("INSERT INTO book_ratings (isbn, rating, created_at) VALUES (?1, ?2, ?3)")
            .bind(isbn)
            .bind(rating)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Lists `{isbn, title, average}` for every book whose mean rating is
    /// at least `threshold`, best-rated first.
    pub async fn averages_at_least(&self, threshold: f64) -> DbResult<Vec<BookRating>> {
        let ratings = sqlx::query_as::<_, BookRating>(
            r#"
            SELECT b.isbn, b.title, AVG(r.rating) AS average_rating
            FROM books b
            INNER JOIN book_ratings r ON r.isbn = b.isbn
            GROUP BY b.isbn, b.title
            HAVING AVG(r.rating) >= ?1
            ORDER BY average_rating DESC, b.rowid ASC
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(ratings)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

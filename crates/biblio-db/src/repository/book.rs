//! # Book Repository
//!
//! Database operations for the book catalog.
//!
//! ## Key Operations
//! - Finder queries (all, by genre, by publisher, by author, top sellers)
//! - Upsert keyed on ISBN
//! - Batch price updates in one transaction (publisher-wide discounts)
//!
//! ## Ordering
//! Listings are returned in insertion order (`rowid`), which also serves
//! as the documented tie-break for equal `copies_sold` in the top-sellers
//! query.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::Book;

const BOOK_COLUMNS: &str = "isbn, title, description, price_cents, genre, \
     year_published, copies_sold, publisher_id, author_id, created_at, updated_at";

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let tech = repo.find_by_genre("Technology").await?;
/// let one = repo.find_by_isbn("9780123456789").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Lists every book in the catalog, in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Finds books whose genre equals the argument exactly.
    ///
    /// The comparison is case-sensitive ("Technology" does not match
    /// "technology"); no matches yield an empty vec, never an error.
    pub async fn find_by_genre(&self, genre: &str) -> DbResult<Vec<Book>> {
        debug!(genre = %genre, "Finding books by genre");

        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE genre = ?1 ORDER BY rowid"
        ))
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Gets a book by its ISBN.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found (including empty/malformed ISBNs)
    pub async fn find_by_isbn(&self, isbn: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE isbn = ?1"
        ))
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Lists the best-selling books, highest `copies_sold` first.
    ///
    /// Ties are broken by insertion order (`rowid`), so the result is
    /// stable across identical catalogs.
    pub async fn top_sellers(&self, limit: u32) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             ORDER BY copies_sold DESC, rowid ASC LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Lists all books carrying the given publisher reference.
    pub async fn find_by_publisher(&self, publisher_id: i64) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE publisher_id = ?1 ORDER BY rowid"
        ))
        .bind(publisher_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Lists all books carrying the given author reference.
    pub async fn find_by_author(&self, author_id: i64) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE author_id = ?1 ORDER BY rowid"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Saves a book, keyed on its ISBN.
    ///
    /// ## Upsert Semantics
    /// Inserts a new row, or replaces the mutable fields of an existing
    /// one. `created_at` survives a replace; `updated_at` is taken from
    /// the incoming value. The ISBN itself never changes.
    pub async fn save(&self, book: &Book) -> DbResult<()> {
        debug!(isbn = %book.isbn, "Saving book");

        sqlx::query(
            r#"
            INSERT INTO books (
                isbn, title, description, price_cents, genre,
                year_published, copies_sold, publisher_id, author_id,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(isbn) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                price_cents = excluded.price_cents,
                genre = excluded.genre,
                year_published = excluded.year_published,
                copies_sold = excluded.copies_sold,
                publisher_id = excluded.publisher_id,
                author_id = excluded.author_id,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.description)
        .bind(book.price_cents)
        .bind(&book.genre)
        .bind(book.year_published)
        .bind(book.copies_sold)
        .bind(book.publisher_id)
        .bind(book.author_id)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates a batch of existing books inside one transaction.
    ///
    /// Used by the publisher-wide discount: either every book's new price
    /// lands, or none does. A missing ISBN aborts the whole batch.
    pub async fn save_all(&self, books: &[Book]) -> DbResult<()> {
        debug!(count = books.len(), "Saving book batch");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for book in books {
            let result = sqlx::query(
                r#"
                UPDATE books SET
                    title = ?2,
                    description = ?3,
                    price_cents = ?4,
                    genre = ?5,
                    year_published = ?6,
                    copies_sold = ?7,
                    publisher_id = ?8,
                    author_id = ?9,
                    updated_at = ?10
                WHERE isbn = ?1
                "#,
            )
            .bind(&book.isbn)
            .bind(&book.title)
            .bind(&book.description)
            .bind(book.price_cents)
            .bind(&book.genre)
            .bind(book.year_published)
            .bind(book.copies_sold)
            .bind(book.publisher_id)
            .bind(book.author_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                // Dropping the transaction rolls the batch back
                return Err(DbError::not_found("Book", &book.isbn));
            }
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Deletes a book by ISBN.
    ///
    /// ## Returns
    /// * `Ok(())` - Book deleted
    /// * `Err(DbError::NotFound)` - ISBN unknown
    pub async fn delete(&self, isbn: &str) -> DbResult<()> {
        debug!(isbn = %isbn, "Deleting book");

        let result = sqlx::query("DELETE FROM books WHERE isbn = ?1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", isbn));
        }

        Ok(())
    }

    /// Counts catalog entries (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Catalog Service
//!
//! Read-through accessors over the book catalog plus the two catalog
//! mutations: the ISBN-keyed upsert and the publisher-wide discount.
//!
//! ## Discount Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  PATCH /api/books/discount?percentage=10&publisherId=7              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate_discount_percentage(10.0) ──► DiscountRate (1000 bps)     │
//! │       │                  │                                          │
//! │       │                  └── out of [0,100] → 400, nothing written  │
//! │       ▼                                                             │
//! │  books().find_by_publisher(7)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  price × (1 - rate), half-up to the cent     (biblio-core)          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  books().save_all(batch)  - one transaction, all-or-nothing         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info};

use crate::error::ApiError;
use biblio_core::validation::{
    validate_discount_percentage, validate_isbn, validate_name, validate_price_cents,
    validate_title,
};
use biblio_core::{Author, Book, Money, Publisher, TOP_SELLERS_LIMIT};
use biblio_db::Database;

/// Input for creating (or replacing) a catalog entry.
///
/// Prices arrive already converted from the wire decimal to [`Money`];
/// timestamps are stamped here, not by the caller.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub genre: String,
    pub year_published: Option<i32>,
    pub copies_sold: i64,
    pub publisher_id: Option<i64>,
    pub author_id: Option<i64>,
}

/// Catalog reads, the ISBN-keyed upsert, and publisher-wide discounting.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Creates a new CatalogService.
    pub fn new(db: Database) -> Self {
        CatalogService { db }
    }

    /// Lists the whole catalog in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().list_all().await?)
    }

    /// Lists books whose genre matches exactly (case-sensitive).
    pub async fn list_by_genre(&self, genre: &str) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().find_by_genre(genre).await?)
    }

    /// Fetches a single book or fails with not-found.
    ///
    /// An empty or malformed ISBN is not validated here - it simply
    /// matches nothing and falls into the same not-found path.
    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Book, ApiError> {
        self.db
            .books()
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| ApiError::not_found("Book", isbn))
    }

    /// Lists the ten best-selling books, descending by copies sold.
    pub async fn top_sellers(&self) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().top_sellers(TOP_SELLERS_LIMIT).await?)
    }

    /// Lists all books of one publisher.
    pub async fn list_by_publisher(&self, publisher_id: i64) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().find_by_publisher(publisher_id).await?)
    }

    /// Lists all books of one author.
    pub async fn list_by_author(&self, author_id: i64) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().find_by_author(author_id).await?)
    }

    /// Creates or replaces a catalog entry, keyed on its ISBN.
    ///
    /// ## Upsert Semantics
    /// Posting an ISBN that already exists replaces the entry's mutable
    /// fields and keeps its original `created_at`. The stored row is
    /// re-read after the write so the response reflects exactly what
    /// persisted.
    pub async fn add_book(&self, new: NewBook) -> Result<Book, ApiError> {
        validate_isbn(&new.isbn)?;
        validate_title(&new.title)?;
        validate_price_cents(new.price.cents())?;

        debug!(isbn = %new.isbn, "Adding book to catalog");

        let now = Utc::now();
        let book = Book {
            isbn: new.isbn.trim().to_string(),
            title: new.title,
            description: new.description,
            price_cents: new.price.cents(),
            genre: new.genre,
            year_published: new.year_published,
            copies_sold: new.copies_sold,
            publisher_id: new.publisher_id,
            author_id: new.author_id,
            created_at: now,
            updated_at: now,
        };

        self.db.books().save(&book).await?;
        self.get_by_isbn(&book.isbn).await
    }

    /// Deletes a catalog entry.
    pub async fn delete_book(&self, isbn: &str) -> Result<(), ApiError> {
        Ok(self.db.books().delete(isbn).await?)
    }

    /// Applies a percentage discount to every book of one publisher.
    ///
    /// The percentage must lie within `[0, 100]`; anything else is
    /// rejected before a single price is touched. The whole batch
    /// persists in one transaction, so books of other publishers - and,
    /// on failure, the publisher's own books - are never left half
    /// updated. Returns the updated books.
    pub async fn apply_publisher_discount(
        &self,
        percentage: f64,
        publisher_id: i64,
    ) -> Result<Vec<Book>, ApiError> {
        let rate = validate_discount_percentage(percentage)?;

        let mut books = self.db.books().find_by_publisher(publisher_id).await?;
        for book in &mut books {
            book.price_cents = book.price().apply_discount(rate).cents();
        }

        self.db.books().save_all(&books).await?;

        info!(
            publisher_id,
            percentage,
            updated = books.len(),
            "Applied publisher discount"
        );

        Ok(books)
    }

    // =========================================================================
    // Publishers & authors
    // =========================================================================

    /// Lists all publishers.
    pub async fn list_publishers(&self) -> Result<Vec<Publisher>, ApiError> {
        Ok(self.db.publishers().list_all().await?)
    }

    /// Creates a publisher, returning it with its generated id.
    pub async fn add_publisher(
        &self,
        name: &str,
        address: Option<&str>,
    ) -> Result<Publisher, ApiError> {
        validate_name(name)?;
        Ok(self.db.publishers().insert(name.trim(), address).await?)
    }

    /// Lists all authors.
    pub async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        Ok(self.db.authors().list_all().await?)
    }

    /// Creates an author, returning it with its generated id.
    pub async fn add_author(&self, name: &str) -> Result<Author, ApiError> {
        validate_name(name)?;
        Ok(self.db.authors().insert(name.trim()).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use biblio_db::DbConfig;

    async fn service() -> CatalogService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CatalogService::new(db)
    }

    fn new_book(isbn: &str, title: &str, price: f64, publisher_id: Option<i64>) -> NewBook {
        NewBook {
            isbn: isbn.to_string(),
            title: title.to_string(),
            description: None,
            price: Money::from_decimal(price),
            genre: "Technology".to_string(),
            year_published: Some(2023),
            copies_sold: 0,
            publisher_id,
            author_id: None,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let svc = service().await;

        svc.add_book(new_book("9780123456789", "Java Programming", 49.99, None))
            .await
            .unwrap();

        let book = svc.get_by_isbn("9780123456789").await.unwrap();
        assert_eq!(book.title, "Java Programming");
        assert_eq!(book.price_cents, 4999);
        assert_eq!(book.genre, "Technology");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let svc = service().await;
        let err = svc.get_by_isbn("9999999999999").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        // Empty ISBN takes the same path - no validation at this layer
        let err = svc.get_by_isbn("").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_add_book_rejects_bad_input() {
        let svc = service().await;

        let err = svc
            .add_book(new_book("", "No ISBN", 10.0, None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut negative = new_book("9780123456789", "Negative", 10.0, None);
        negative.price = Money::from_cents(-1);
        let err = svc.add_book(negative).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_publisher_discount_scenario() {
        let svc = service().await;

        let publisher = svc
            .add_publisher("Tech Books", Some("123 Publisher Street"))
            .await
            .unwrap();

        svc.add_book(new_book("9780123456789", "A", 49.99, Some(publisher.id)))
            .await
            .unwrap();
        svc.add_book(new_book("9780987654321", "B", 39.99, Some(publisher.id)))
            .await
            .unwrap();

        let updated = svc
            .apply_publisher_discount(10.0, publisher.id)
            .await
            .unwrap();
        assert_eq!(updated.len(), 2);

        // 49.99 → 44.99 and 39.99 → 35.99, half-up at 2 fraction digits
        let a = svc.get_by_isbn("9780123456789").await.unwrap();
        let b = svc.get_by_isbn("9780987654321").await.unwrap();
        assert_eq!(a.price_cents, 4499);
        assert_eq!(b.price_cents, 3599);
    }

    #[tokio::test]
    async fn test_discount_leaves_other_publishers_untouched() {
        let svc = service().await;

        let target = svc.add_publisher("Target", None).await.unwrap();
        let other = svc.add_publisher("Other", None).await.unwrap();

        svc.add_book(new_book("1111111111111", "Mine", 20.00, Some(target.id)))
            .await
            .unwrap();
        svc.add_book(new_book("2222222222222", "Theirs", 20.00, Some(other.id)))
            .await
            .unwrap();

        svc.apply_publisher_discount(50.0, target.id).await.unwrap();

        assert_eq!(
            svc.get_by_isbn("1111111111111").await.unwrap().price_cents,
            1000
        );
        assert_eq!(
            svc.get_by_isbn("2222222222222").await.unwrap().price_cents,
            2000
        );
    }

    #[tokio::test]
    async fn test_discount_zero_percent_is_noop() {
        let svc = service().await;
        let publisher = svc.add_publisher("P", None).await.unwrap();
        svc.add_book(new_book("1111111111111", "A", 49.99, Some(publisher.id)))
            .await
            .unwrap();

        svc.apply_publisher_discount(0.0, publisher.id).await.unwrap();

        assert_eq!(
            svc.get_by_isbn("1111111111111").await.unwrap().price_cents,
            4999
        );
    }

    #[tokio::test]
    async fn test_discount_out_of_range_rejected_before_writes() {
        let svc = service().await;
        let publisher = svc.add_publisher("P", None).await.unwrap();
        svc.add_book(new_book("1111111111111", "A", 49.99, Some(publisher.id)))
            .await
            .unwrap();

        for pct in [-1.0, 100.5, f64::NAN] {
            let err = svc
                .apply_publisher_discount(pct, publisher.id)
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        // Nothing was written
        assert_eq!(
            svc.get_by_isbn("1111111111111").await.unwrap().price_cents,
            4999
        );
    }

    #[tokio::test]
    async fn test_discount_unknown_publisher_updates_nothing() {
        let svc = service().await;
        let updated = svc.apply_publisher_discount(10.0, 404).await.unwrap();
        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_isbn() {
        let svc = service().await;

        svc.add_book(new_book("9780123456789", "First", 10.00, None))
            .await
            .unwrap();
        svc.add_book(new_book("9780123456789", "Second", 12.50, None))
            .await
            .unwrap();

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Second");
        assert_eq!(all[0].price_cents, 1250);
    }

    #[tokio::test]
    async fn test_top_sellers_ordering() {
        let svc = service().await;

        let mut a = new_book("1111111111111", "Hit", 10.0, None);
        a.copies_sold = 1000;
        let mut b = new_book("2222222222222", "Solid", 10.0, None);
        b.copies_sold = 750;
        svc.add_book(b).await.unwrap();
        svc.add_book(a).await.unwrap();

        let top = svc.top_sellers().await.unwrap();
        assert_eq!(top[0].title, "Hit");
        assert_eq!(top[1].title, "Solid");
    }
}

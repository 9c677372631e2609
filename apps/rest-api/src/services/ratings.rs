//! # Ratings Service
//!
//! Derived per-book rating averages and the minimum-threshold listing.
//! The mean itself is computed by the store's aggregate query; this layer
//! only owns the contract: books without ratings have no average and are
//! never listed.

use crate::error::ApiError;
use biblio_core::BookRating;
use biblio_db::Database;

/// Rating aggregation over the catalog.
#[derive(Debug, Clone)]
pub struct RatingService {
    db: Database,
}

impl RatingService {
    /// Creates a new RatingService.
    pub fn new(db: Database) -> Self {
        RatingService { db }
    }

    /// Lists `{isbn, title, averageRating}` for every book whose average
    /// rating is at least `threshold`.
    pub async fn list_by_minimum_rating(
        &self,
        threshold: i64,
    ) -> Result<Vec<BookRating>, ApiError> {
        Ok(self.db.ratings().averages_at_least(threshold as f64).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_core::Book;
    use biblio_db::DbConfig;
    use chrono::Utc;

    async fn service_with_rated_books() -> RatingService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let now = Utc::now();
        for (isbn, title) in [
            ("1111111111111", "Five Stars"),
            ("2222222222222", "Three Stars"),
            ("3333333333333", "Unrated"),
        ] {
            db.books()
                .save(&Book {
                    isbn: isbn.to_string(),
                    title: title.to_string(),
                    description: None,
                    price_cents: 1999,
                    genre: "Fiction".to_string(),
                    year_published: None,
                    copies_sold: 0,
                    publisher_id: None,
                    author_id: None,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        db.ratings().insert("1111111111111", 5).await.unwrap();
        db.ratings().insert("1111111111111", 5).await.unwrap();
        db.ratings().insert("2222222222222", 3).await.unwrap();

        RatingService::new(db)
    }

    #[tokio::test]
    async fn test_threshold_filters() {
        let svc = service_with_rated_books().await;

        let rated = svc.list_by_minimum_rating(4).await.unwrap();
        assert_eq!(rated.len(), 1);
        assert_eq!(rated[0].title, "Five Stars");
        assert!((rated[0].average_rating - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unrated_books_are_excluded() {
        let svc = service_with_rated_books().await;

        // Threshold 1 matches every rated book, but "Unrated" has no
        // average to compare at all
        let rated = svc.list_by_minimum_rating(1).await.unwrap();
        assert_eq!(rated.len(), 2);
        assert!(rated.iter().all(|r| r.title != "Unrated"));
    }
}

//! # Book Routes
//!
//! Catalog endpoints under `/api/books`.
//!
//! ## Endpoints
//! ```text
//! GET    /api/books                         list all (summaries)
//! GET    /api/books/genre/{genre}           filter by exact genre
//! GET    /api/books/rating/{rating}         filter by min average rating
//! GET    /api/books/top-sellers             top 10 by copies sold
//! GET    /api/books/publisher/{publisherId} books of a publisher
//! GET    /api/books/author/{authorId}       books of an author
//! GET    /api/books/{isbn}                  fetch one (detail), 404 if absent
//! POST   /api/books                         create/upsert, 201
//! DELETE /api/books/{isbn}                  delete, 204
//! PATCH  /api/books/discount?percentage=&publisherId=   bulk price update
//! ```
//!
//! List views carry the summary shape `{isbn, title, price, genre}`;
//! the detail view adds description, yearPublished, copiesSold,
//! publisherId and authorId. Prices are JSON decimals with two fraction
//! digits - the cents↔decimal conversion happens only in these DTOs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::NewBook;
use crate::AppState;
use biblio_core::{Book, BookRating, Money};

/// Builds the `/api/books` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/genre/{genre}", get(list_by_genre))
        .route("/rating/{rating}", get(list_by_min_rating))
        .route("/top-sellers", get(top_sellers))
        .route("/publisher/{publisher_id}", get(list_by_publisher))
        .route("/author/{author_id}", get(list_by_author))
        .route("/discount", patch(apply_discount))
        .route("/{isbn}", get(get_book).delete(delete_book))
}

// =============================================================================
// DTOs
// =============================================================================

/// Book summary for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummaryDto {
    pub isbn: String,
    pub title: String,
    pub price: f64,
    pub genre: String,
}

impl From<Book> for BookSummaryDto {
    fn from(b: Book) -> Self {
        BookSummaryDto {
            isbn: b.isbn,
            title: b.title,
            price: Money::from_cents(b.price_cents).to_decimal(),
            genre: b.genre,
        }
    }
}

/// Full book detail for single-entity views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailDto {
    pub isbn: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub genre: String,
    pub year_published: Option<i32>,
    pub copies_sold: i64,
    pub publisher_id: Option<i64>,
    pub author_id: Option<i64>,
}

impl From<Book> for BookDetailDto {
    fn from(b: Book) -> Self {
        BookDetailDto {
            isbn: b.isbn,
            title: b.title,
            description: b.description,
            price: Money::from_cents(b.price_cents).to_decimal(),
            genre: b.genre,
            year_published: b.year_published,
            copies_sold: b.copies_sold,
            publisher_id: b.publisher_id,
            author_id: b.author_id,
        }
    }
}

/// Request body for creating (or replacing) a book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub isbn: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub genre: String,
    pub year_published: Option<i32>,
    pub copies_sold: Option<i64>,
    pub publisher_id: Option<i64>,
    pub author_id: Option<i64>,
}

/// Derived rating row for the minimum-rating listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub isbn: String,
    pub title: String,
    pub average_rating: f64,
}

impl From<BookRating> for RatingDto {
    fn from(r: BookRating) -> Self {
        RatingDto {
            isbn: r.isbn,
            title: r.title,
            average_rating: r.average_rating,
        }
    }
}

/// Query parameters for the bulk discount endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountParams {
    pub percentage: f64,
    pub publisher_id: i64,
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let books = state.catalog.list_all().await?;
    Ok(Json(books.into_iter().map(BookSummaryDto::from).collect()))
}

async fn list_by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let books = state.catalog.list_by_genre(&genre).await?;
    Ok(Json(books.into_iter().map(BookSummaryDto::from).collect()))
}

async fn list_by_min_rating(
    State(state): State<Arc<AppState>>,
    Path(rating): Path<i64>,
) -> Result<Json<Vec<RatingDto>>, ApiError> {
    let rated = state.ratings.list_by_minimum_rating(rating).await?;
    Ok(Json(rated.into_iter().map(RatingDto::from).collect()))
}

async fn top_sellers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let books = state.catalog.top_sellers().await?;
    Ok(Json(books.into_iter().map(BookSummaryDto::from).collect()))
}

async fn list_by_publisher(
    State(state): State<Arc<AppState>>,
    Path(publisher_id): Path<i64>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let books = state.catalog.list_by_publisher(publisher_id).await?;
    Ok(Json(books.into_iter().map(BookSummaryDto::from).collect()))
}

async fn list_by_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i64>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let books = state.catalog.list_by_author(author_id).await?;
    Ok(Json(books.into_iter().map(BookSummaryDto::from).collect()))
}

async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<BookDetailDto>, ApiError> {
    let book = state.catalog.get_by_isbn(&isbn).await?;
    Ok(Json(BookDetailDto::from(book)))
}

async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookDetailDto>), ApiError> {
    let book = state
        .catalog
        .add_book(NewBook {
            isbn: req.isbn,
            title: req.title,
            description: req.description,
            price: Money::from_decimal(req.price),
            genre: req.genre,
            year_published: req.year_published,
            copies_sold: req.copies_sold.unwrap_or(0),
            publisher_id: req.publisher_id,
            author_id: req.author_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BookDetailDto::from(book))))
}

async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_book(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_discount(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscountParams>,
) -> Result<Json<Vec<BookSummaryDto>>, ApiError> {
    let updated = state
        .catalog
        .apply_publisher_discount(params.percentage, params.publisher_id)
        .await?;
    Ok(Json(updated.into_iter().map(BookSummaryDto::from).collect()))
}

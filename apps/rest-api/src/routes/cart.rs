//! # Shopping Cart Routes
//!
//! Cart endpoints under `/api/shopping-cart`.
//!
//! ## Endpoints
//! ```text
//! GET    /api/shopping-cart                        discoverability links
//! GET    /api/shopping-cart/{userId}/books         list cart lines
//! GET    /api/shopping-cart/{userId}/subtotal      {subtotal, totalItems}
//! POST   /api/shopping-cart/{userId}/add-book      body {isbn}
//! DELETE /api/shopping-cart/{userId}/remove-book   body {isbn}
//! ```
//!
//! The user id is validated here, at the boundary: a non-positive id is a
//! 400 and the cart service is never invoked. The root endpoint is a
//! static link descriptor - presentation only, no cart state behind it.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use biblio_core::validation::validate_user_id;
use biblio_core::{CartItem, CartSummary, Money};

/// Builds the `/api/shopping-cart` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(cart_root))
        .route("/{user_id}/books", get(list_cart_books))
        .route("/{user_id}/subtotal", get(cart_subtotal))
        .route("/{user_id}/add-book", post(add_book_to_cart))
        .route("/{user_id}/remove-book", delete(remove_book_from_cart))
}

// =============================================================================
// DTOs
// =============================================================================

/// One cart line as shown to the client (add-time snapshot).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub isbn: String,
    pub title: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        CartItemDto {
            isbn: item.isbn,
            title: item.title,
            price: Money::from_cents(item.price_cents).to_decimal(),
            quantity: item.quantity,
        }
    }
}

/// Aggregated cart totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtotalDto {
    pub subtotal: f64,
    pub total_items: i64,
}

impl From<CartSummary> for SubtotalDto {
    fn from(summary: CartSummary) -> Self {
        SubtotalDto {
            subtotal: summary.subtotal().to_decimal(),
            total_items: summary.total_items,
        }
    }
}

/// Request body naming the book to add or remove.
#[derive(Debug, Clone, Deserialize)]
pub struct CartBookRequest {
    pub isbn: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Static discoverability descriptor for the cart API root.
async fn cart_root() -> Json<Value> {
    Json(json!({
        "_links": {
            "self": { "href": "/api/shopping-cart" },
            "books": { "href": "/api/shopping-cart/{userId}/books", "templated": true },
            "subtotal": { "href": "/api/shopping-cart/{userId}/subtotal", "templated": true },
            "add-book": { "href": "/api/shopping-cart/{userId}/add-book", "templated": true },
            "remove-book": { "href": "/api/shopping-cart/{userId}/remove-book", "templated": true }
        }
    }))
}

async fn list_cart_books(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<CartItemDto>>, ApiError> {
    validate_user_id(user_id)?;
    let items = state.cart.list_items(user_id).await?;
    Ok(Json(items.into_iter().map(CartItemDto::from).collect()))
}

async fn cart_subtotal(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<SubtotalDto>, ApiError> {
    validate_user_id(user_id)?;
    let summary = state.cart.subtotal(user_id).await?;
    Ok(Json(SubtotalDto::from(summary)))
}

async fn add_book_to_cart(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<CartBookRequest>,
) -> Result<Json<Vec<CartItemDto>>, ApiError> {
    validate_user_id(user_id)?;
    let items = state.cart.add_book(user_id, &req.isbn).await?;
    Ok(Json(items.into_iter().map(CartItemDto::from).collect()))
}

async fn remove_book_from_cart(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<CartBookRequest>,
) -> Result<Json<Vec<CartItemDto>>, ApiError> {
    validate_user_id(user_id)?;
    let items = state.cart.remove_book(user_id, &req.isbn).await?;
    Ok(Json(items.into_iter().map(CartItemDto::from).collect()))
}

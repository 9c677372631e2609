//! # Shopping Cart Service
//!
//! Per-user cart mutation and subtotal aggregation.
//!
//! ## State Machine
//! Each `(user, isbn)` pair is either **absent** or **present(quantity)**:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │            add_book                 add_book                        │
//! │   absent ──────────► present(1) ──────────► present(2) ──► ...      │
//! │     ▲                    │   ▲                  │                   │
//! │     │    remove_book     │   │   remove_book    │                   │
//! │     └────────────────────┘   └──────────────────┘                   │
//! │                                                                     │
//! │   remove_book on absent: no-op (removals are idempotent)            │
//! │   add_book with unknown ISBN: not-found, cart untouched             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Snapshots
//! A line created by `add_book` freezes the book's title and price at
//! that moment. Later catalog edits do not reach into carts; the user
//! checks out what they saw when they added the item.
//!
//! User-id validation happens at the HTTP boundary - a non-positive id is
//! a malformed request and never reaches these methods.

use chrono::Utc;
use tracing::debug;

use crate::error::ApiError;
use biblio_core::{CartItem, CartSummary, ValidationError, MAX_ITEM_QUANTITY};
use biblio_db::Database;

/// Per-user shopping cart operations.
#[derive(Debug, Clone)]
pub struct ShoppingCartService {
    db: Database,
}

impl ShoppingCartService {
    /// Creates a new ShoppingCartService.
    pub fn new(db: Database) -> Self {
        ShoppingCartService { db }
    }

    /// Adds one copy of a book to the user's cart.
    ///
    /// absent → present(1), present(q) → present(q+1). Fails with
    /// not-found if the ISBN isn't in the catalog, and with a validation
    /// error once a line reaches [`MAX_ITEM_QUANTITY`].
    pub async fn add_book(&self, user_id: i64, isbn: &str) -> Result<Vec<CartItem>, ApiError> {
        let book = self
            .db
            .books()
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| ApiError::not_found("Book", isbn))?;

        match self.db.cart_items().find(user_id, &book.isbn).await? {
            Some(line) => {
                if line.quantity >= MAX_ITEM_QUANTITY {
                    return Err(ValidationError::OutOfRange {
                        field: "quantity".to_string(),
                        min: 1,
                        max: MAX_ITEM_QUANTITY,
                    }
                    .into());
                }
                debug!(user_id, isbn = %book.isbn, quantity = line.quantity + 1, "Incrementing cart line");
                self.db
                    .cart_items()
                    .set_quantity(user_id, &book.isbn, line.quantity + 1)
                    .await?;
            }
            None => {
                debug!(user_id, isbn = %book.isbn, "Creating cart line");
                self.db
                    .cart_items()
                    .insert(&CartItem {
                        user_id,
                        isbn: book.isbn.clone(),
                        title: book.title.clone(),
                        price_cents: book.price_cents,
                        quantity: 1,
                        added_at: Utc::now(),
                    })
                    .await?;
            }
        }

        self.list_items(user_id).await
    }

    /// Removes one copy of a book from the user's cart.
    ///
    /// present(q>1) → present(q−1), present(1) → absent, absent → no-op.
    pub async fn remove_book(&self, user_id: i64, isbn: &str) -> Result<Vec<CartItem>, ApiError> {
        match self.db.cart_items().find(user_id, isbn).await? {
            Some(line) if line.quantity > 1 => {
                debug!(user_id, isbn = %isbn, quantity = line.quantity - 1, "Decrementing cart line");
                self.db
                    .cart_items()
                    .set_quantity(user_id, isbn, line.quantity - 1)
                    .await?;
            }
            Some(_) => {
                debug!(user_id, isbn = %isbn, "Removing last copy from cart");
                self.db.cart_items().delete(user_id, isbn).await?;
            }
            None => {
                debug!(user_id, isbn = %isbn, "Remove on absent line, ignoring");
            }
        }

        self.list_items(user_id).await
    }

    /// Lists the user's cart lines with their add-time snapshots.
    pub async fn list_items(&self, user_id: i64) -> Result<Vec<CartItem>, ApiError> {
        Ok(self.db.cart_items().list_for_user(user_id).await?)
    }

    /// Computes the cart subtotal and item count.
    ///
    /// An empty (or never-touched) cart is `{0, 0}`, not an error.
    pub async fn subtotal(&self, user_id: i64) -> Result<CartSummary, ApiError> {
        let items = self.db.cart_items().list_for_user(user_id).await?;
        Ok(CartSummary::of(&items))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

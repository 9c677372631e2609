//! # Domain Types
//!
//! Core domain types used throughout Biblio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      Book       │   │    Publisher    │   │     Author      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  isbn (PK)      │   │  id (generated) │   │  id (generated) │   │
//! │  │  title, genre   │   │  name           │   │  name           │   │
//! │  │  price_cents    │   │  address        │   │                 │   │
//! │  │  copies_sold    │   └─────────────────┘   └─────────────────┘   │
//! │  └─────────────────┘                                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    CartItem     │   │   BookRating    │   │  DiscountRate   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  (user, isbn)   │   │  isbn, title    │   │  bps (u32)      │   │
//! │  │  qty, snapshot  │   │  average (f64)  │   │  1000 = 10.00%  │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Books use their ISBN as the natural primary key and it is immutable
//! once created. Publishers and authors use store-generated integer ids.
//! Cart items are keyed by the `(user_id, isbn)` pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10.00% - the integer form keeps the price math exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for the query-string form).
    ///
    /// Sub-basis-point precision is rounded away: `10.005%` becomes 1001 bps.
    /// Range checking lives in [`crate::validation::validate_discount_percentage`].
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// ISBN - natural primary key, immutable once created.
    /// 13 digits by convention; the format is not length-enforced.
    pub isbn: String,

    /// Display title.
    pub title: String,

    /// Optional back-cover description.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Genre, matched by exact case-sensitive equality in filters.
    pub genre: String,

    /// Year of publication.
    pub year_published: Option<i32>,

    /// Cumulative sales counter, feeds the top-sellers listing.
    pub copies_sold: i64,

    /// Owning publisher, if known.
    pub publisher_id: Option<i64>,

    /// Author reference, if known.
    pub author_id: Option<i64>,

    /// When the book was created.
    pub created_at: DateTime<Utc>,

    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Publisher
// =============================================================================

/// A publishing house owning zero or more books.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Publisher {
    /// Store-generated id.
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Author
// =============================================================================

/// An author referenced by `Book.author_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Author {
    /// Store-generated id.
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of a user's shopping cart.
///
/// ## Snapshot Pattern
/// `title` and `price_cents` are copied from the catalog when the line is
/// created. The cart keeps displaying what the user put in it, even if the
/// catalog entry is repriced or retitled afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CartItem {
    /// Owning user. Carts are purely per-user; there is no cross-user state.
    pub user_id: i64,

    /// Book reference.
    pub isbn: String,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Number of copies in the cart, always > 0; a line at quantity zero
    /// is deleted instead.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Returns the snapshot unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }
}

// =============================================================================
// Book Rating (derived)
// =============================================================================

/// Derived per-book average rating.
///
/// Not persisted as an entity: computed as the arithmetic mean over the
/// book's rating records. Books with zero ratings have no average and are
/// excluded from rating listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BookRating {
    pub isbn: String,
    pub title: String,
    pub average_rating: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

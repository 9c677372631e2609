//! # biblio-core: Pure Business Logic for Biblio
//!
//! This crate is the **heart** of Biblio. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Biblio Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    REST API (axum)                          │   │
//! │  │    /api/books ──► /api/publishers ──► /api/shopping-cart    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ biblio-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────┐    │   │
//! │  │   │  types   │ │  money   │ │   cart   │ │ validation │    │   │
//! │  │   │  Book    │ │  Money   │ │ Summary  │ │   rules    │    │   │
//! │  │   │ Publisher│ │ Discount │ │ math     │ │   checks   │    │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────┘    │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                  biblio-db (Database Layer)                 │   │
//! │  │            SQLite queries, migrations, repositories         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Publisher, Author, CartItem, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart subtotal aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use biblio_core::money::Money;
//! use biblio_core::types::DiscountRate;
//!
//! // Create money from cents (never from raw floats!)
//! let price = Money::from_cents(4999); // $49.99
//!
//! // Apply a publisher-wide 10% discount
//! let rate = DiscountRate::from_bps(1000); // 10.00%
//! let discounted = price.apply_discount(rate);
//!
//! // $49.99 less 10% = $44.99 (half-up at 2 fraction digits)
//! assert_eq!(discounted.cents(), 4499);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use biblio_core::Money` instead of
// `use biblio_core::money::Money`

pub use cart::CartSummary;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries returned by the top-sellers listing.
///
/// ## Business Reason
/// The storefront renders a fixed "best sellers" shelf; the query is
/// capped here rather than parameterized per caller.
pub const TOP_SELLERS_LIMIT: u32 = 10;

/// Maximum quantity of a single title in one cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

//! # Cart Aggregation
//!
//! Pure subtotal math over a user's cart lines.
//!
//! The persistence layer returns the lines; everything money-related about
//! the cart happens here so it can be tested without a database.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CartItem;

/// Aggregated totals of one user's cart.
///
/// ## Invariant
/// `subtotal == Σ (snapshot unit price × quantity)` over the lines,
/// `total_items == Σ quantity`. An empty cart is `{0, 0}`, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartSummary {
    /// Sum of line totals, in cents.
    pub subtotal_cents: i64,

    /// Total number of copies across all lines.
    pub total_items: i64,
}

impl CartSummary {
    /// Computes the summary for a set of cart lines.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::cart::CartSummary;
    ///
    /// let summary = CartSummary::of(&[]);
    /// assert_eq!(summary.subtotal_cents, 0);
    /// assert_eq!(summary.total_items, 0);
    /// ```
    pub fn of(items: &[CartItem]) -> Self {
        CartSummary {
            subtotal_cents: items.iter().map(CartItem::line_total_cents).sum(),
            total_items: items.iter().map(|i| i.quantity).sum(),
        }
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

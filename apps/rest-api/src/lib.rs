//! # Biblio REST API
//!
//! HTTP boundary for the Biblio bookstore service.
//!
//! ## Module Organization
//! ```text
//! biblio_rest_api/
//! ├── lib.rs          ◄─── You are here (AppState, exports)
//! ├── config.rs       ◄─── Environment-based configuration
//! ├── error.rs        ◄─── ApiError: status + JSON error envelope
//! ├── services/
//! │   ├── catalog.rs  ◄─── Catalog reads, upsert, publisher discount
//! │   ├── ratings.rs  ◄─── Average-rating listing
//! │   └── cart.rs     ◄─── Cart state machine + subtotal
//! └── routes/
//!     ├── books.rs    ◄─── /api/books handlers + DTOs
//!     ├── publishers.rs
//!     ├── authors.rs
//!     └── cart.rs     ◄─── /api/shopping-cart handlers + DTOs
//! ```
//!
//! Handlers stay thin: parse the request, call a service, render DTOs.
//! All money leaves this crate as JSON decimals with two fraction digits
//! and lives everywhere else as integer cents.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use biblio_db::Database;
use services::{CatalogService, RatingService, ShoppingCartService};

/// Shared application state.
///
/// Services are cheap handles over the pooled database; one instance of
/// each is built at startup and shared across requests via `Arc`.
pub struct AppState {
    pub db: Database,
    pub catalog: CatalogService,
    pub ratings: RatingService,
    pub cart: ShoppingCartService,
}

impl AppState {
    /// Builds the application state from a connected database.
    pub fn new(db: Database) -> Self {
        AppState {
            catalog: CatalogService::new(db.clone()),
            ratings: RatingService::new(db.clone()),
            cart: ShoppingCartService::new(db.clone()),
            db,
        }
    }
}

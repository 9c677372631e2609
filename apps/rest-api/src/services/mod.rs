//! # Service Layer
//!
//! The services sit between the HTTP handlers and the repositories:
//! handlers parse requests and render responses, repositories run SQL,
//! and everything in between - catalog reads, the publisher-wide discount,
//! cart state transitions, subtotal aggregation - lives here.
//!
//! ```text
//! routes/*  ──►  services/*  ──►  biblio_db repositories
//!                   │
//!                   └──►  biblio_core (money math, validation)
//! ```

pub mod cart;
pub mod catalog;
pub mod ratings;

pub use cart::ShoppingCartService;
pub use catalog::{CatalogService, NewBook};
pub use ratings::RatingService;

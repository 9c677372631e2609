//! # biblio-db: Database Layer for Biblio
//!
//! This crate provides database access for the Biblio bookstore service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (book, publisher, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let config = DbConfig::new("path/to/biblio.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let books = db.books().list_all().await?;
//! let techies = db.books().find_by_genre("Technology").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::author::AuthorRepository;
pub use repository::book::BookRepository;
pub use repository::cart::CartItemRepository;
pub use repository::publisher::PublisherRepository;
pub use repository::rating::RatingRepository;

//! # Repository Module
//!
//! Database repository implementations for Biblio.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                               │
//! │                                                                     │
//! │  Service layer                                                      │
//! │       │                                                             │
//! │       │  db.books().find_by_publisher(7)                            │
//! │       ▼                                                             │
//! │  BookRepository                                                     │
//! │  ├── list_all / find_by_* (finders)                                 │
//! │  ├── save / save_all      (writes)                                  │
//! │  └── delete                                                         │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Each repository is a plain capability set over one entity -        │
//! │  no shared base type, no inheritance.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`book::BookRepository`] - Catalog CRUD and finder queries
//! - [`publisher::PublisherRepository`] - Publisher CRUD
//! - [`author::AuthorRepository`] - Author CRUD
//! - [`cart::CartItemRepository`] - Per-user cart lines
//! - [`rating::RatingRepository`] - Rating records and averages

pub mod author;
pub mod book;
pub mod cart;
pub mod publisher;
pub mod rating;

//! # Author Routes
//!
//! Author endpoints under `/api/authors`. Books of a specific author are
//! served from the catalog side (`/api/books/author/{authorId}`).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use biblio_core::Author;

/// Builds the `/api/authors` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_authors).post(create_author))
}

/// Author representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(a: Author) -> Self {
        AuthorDto {
            id: a.id,
            name: a.name,
        }
    }
}

/// Request body for creating an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
}

async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorDto>>, ApiError> {
    let authors = state.catalog.list_authors().await?;
    Ok(Json(authors.into_iter().map(AuthorDto::from).collect()))
}

async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAuthorRequest>,
) -> Result<Json<AuthorDto>, ApiError> {
    let author = state.catalog.add_author(&req.name).await?;
    Ok(Json(AuthorDto::from(author)))
}

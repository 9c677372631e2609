//! # Publisher Routes
//!
//! Publisher endpoints under `/api/publishers`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use biblio_core::Publisher;

/// Builds the `/api/publishers` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_publishers).post(create_publisher))
}

/// Publisher representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
}

impl From<Publisher> for PublisherDto {
    fn from(p: Publisher) -> Self {
        PublisherDto {
            id: p.id,
            name: p.name,
            address: p.address,
        }
    }
}

/// Request body for creating a publisher.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisherRequest {
    pub name: String,
    pub address: Option<String>,
}

async fn list_publishers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PublisherDto>>, ApiError> {
    let publishers = state.catalog.list_publishers().await?;
    Ok(Json(publishers.into_iter().map(PublisherDto::from).collect()))
}

async fn create_publisher(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePublisherRequest>,
) -> Result<Json<PublisherDto>, ApiError> {
    let publisher = state
        .catalog
        .add_publisher(&req.name, req.address.as_deref())
        .await?;
    Ok(Json(PublisherDto::from(publisher)))
}

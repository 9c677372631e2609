//! # Route Assembly
//!
//! Builds the full application router: the four API route groups nested
//! under `/api`, a liveness endpoint, and the cross-cutting tower-http
//! layers (request tracing, CORS, request ids, timeouts).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::AppState;

pub mod authors;
pub mod books;
pub mod cart;
pub mod publishers;

/// Builds the application router with all routes and middleware attached.
pub fn api_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/books", books::router())
        .nest("/api/publishers", publishers::router())
        .nest("/api/authors", authors::router())
        .nest("/api/shopping-cart", cart::router())
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(request_timeout))
}

/// Liveness probe: verifies the store answers a trivial query.
async fn healthz(State(state): State<Arc<AppState>>) -> Result<&'static str, StatusCode> {
    if state.db.health_check().await {
        Ok("ok")
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use biblio_db::{Database, DbConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = Arc::new(AppState::new(db));
        api_router(state, Duration::from_secs(5))
    }

    /// Sends one request and returns (status, parsed JSON body or Null).
    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn book_body(isbn: &str, title: &str, price: f64, publisher_id: Option<i64>) -> Value {
        json!({
            "isbn": isbn,
            "title": title,
            "description": "A test book",
            "price": price,
            "genre": "Technology",
            "yearPublished": 2023,
            "copiesSold": 0,
            "publisherId": publisher_id,
        })
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = test_app().await;
        let (status, _) = send(&app, "GET", "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_then_fetch_book() {
        let app = test_app().await;

        let (status, created) = send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9781234567890", "Python Data Science", 54.99, None)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["price"], json!(54.99));

        let (status, body) = send(&app, "GET", "/api/books/9781234567890", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isbn"], json!("9781234567890"));
        assert_eq!(body["title"], json!("Python Data Science"));
        assert_eq!(body["price"], json!(54.99));
        assert_eq!(body["yearPublished"], json!(2023));

        // List views carry the summary shape only
        let (_, list) = send(&app, "GET", "/api/books", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert!(list[0].get("description").is_none());
        assert_eq!(list[0]["genre"], json!("Technology"));
    }

    #[tokio::test]
    async fn test_get_unknown_isbn_is_404() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/books/9999999999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NOT_FOUND"));
        assert!(body["traceId"].is_string());
    }

    #[tokio::test]
    async fn test_genre_filter_is_case_sensitive() {
        let app = test_app().await;
        send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9781234567890", "A", 10.0, None)),
        )
        .await;

        let (status, body) = send(&app, "GET", "/api/books/genre/Technology", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, "GET", "/api/books/genre/technology", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_top_sellers_order() {
        let app = test_app().await;

        let mut high = book_body("1111111111111", "Hit", 10.0, None);
        high["copiesSold"] = json!(1000);
        let mut low = book_body("2222222222222", "Solid", 10.0, None);
        low["copiesSold"] = json!(750);

        send(&app, "POST", "/api/books", Some(low)).await;
        send(&app, "POST", "/api/books", Some(high)).await;

        let (status, body) = send(&app, "GET", "/api/books/top-sellers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["title"], json!("Hit"));
        assert_eq!(body[1]["title"], json!("Solid"));
    }

    #[tokio::test]
    async fn test_publisher_discount_flow() {
        let app = test_app().await;

        let (status, publisher) = send(
            &app,
            "POST",
            "/api/publishers",
            Some(json!({"name": "Tech Books", "address": "123 Publisher Street"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let publisher_id = publisher["id"].as_i64().unwrap();

        send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9780123456789", "A", 49.99, Some(publisher_id))),
        )
        .await;
        send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9780987654321", "B", 39.99, Some(publisher_id))),
        )
        .await;

        let uri = format!(
            "/api/books/discount?percentage=10&publisherId={}",
            publisher_id
        );
        let (status, updated) = send(&app, "PATCH", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated.as_array().unwrap().len(), 2);

        let (_, a) = send(&app, "GET", "/api/books/9780123456789", None).await;
        let (_, b) = send(&app, "GET", "/api/books/9780987654321", None).await;
        assert_eq!(a["price"], json!(44.99));
        assert_eq!(b["price"], json!(35.99));
    }

    #[tokio::test]
    async fn test_discount_out_of_range_is_400() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "PATCH",
            "/api/books/discount?percentage=150&publisherId=1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_rating_listing() {
        let app = test_app().await;
        send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9780123456789", "Rated", 10.0, None)),
        )
        .await;

        // No ratings recorded: every threshold yields an empty list
        let (status, body) = send(&app, "GET", "/api/books/rating/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let app = test_app().await;
        send(
            &app,
            "POST",
            "/api/books",
            Some(book_body("9780123456789", "Test Book", 29.99, None)),
        )
        .await;

        let add = json!({"isbn": "9780123456789"});
        let (status, _) = send(&app, "POST", "/api/shopping-cart/1/add-book", Some(add.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let (status, items) =
            send(&app, "POST", "/api/shopping-cart/1/add-book", Some(add.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items[0]["quantity"], json!(2));
        assert_eq!(items[0]["price"], json!(29.99));

        let (status, subtotal) = send(&app, "GET", "/api/shopping-cart/1/subtotal", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(subtotal["subtotal"], json!(59.98));
        assert_eq!(subtotal["totalItems"], json!(2));

        let (status, items) = send(
            &app,
            "DELETE",
            "/api/shopping-cart/1/remove-book",
            Some(add.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items[0]["quantity"], json!(1));

        let (_, items) = send(
            &app,
            "DELETE",
            "/api/shopping-cart/1/remove-book",
            Some(add.clone()),
        )
        .await;
        assert_eq!(items, json!([]));

        // Removing from an absent line stays a 200 no-op
        let (status, _) = send(&app, "DELETE", "/api/shopping-cart/1/remove-book", Some(add)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cart_add_unknown_isbn_is_404() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/shopping-cart/1/add-book",
            Some(json!({"isbn": "0000000000000"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_subtotal_rejects_non_positive_user_id() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/shopping-cart/-1/subtotal", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_cart_root_links() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/api/shopping-cart", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["_links"]["subtotal"]["href"].is_string());
        assert_eq!(body["_links"]["self"]["href"], json!("/api/shopping-cart"));
    }
}

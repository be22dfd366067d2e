//! HTTP-level tests driving the full router against a seeded in-memory database.

mod comment;
mod fallback;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext, fixture};
use tower::ServiceExt;

use crate::server::{router, state::AppState};

/// Builds the application over a database holding the seed dataset.
///
/// The returned context owns the database and must outlive the router's requests.
async fn seeded_app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await.unwrap();

    let app = router::app(AppState::new(db.clone()));

    (test, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn patch_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends a request and decodes the JSON response body.
async fn send<T: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

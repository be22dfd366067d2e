use axum::http::{Method, StatusCode};
use serde_json::Value;

use super::*;
use crate::model::api::ErrorDto;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn unknown_path_returns_invalid_path() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, ErrorDto) = send(&app, get("/api/not-a-route")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "invalid path");
}

#[tokio::test]
async fn unknown_path_ignores_method() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, ErrorDto) =
        send(&app, request(Method::DELETE, "/api/not-a-route")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "invalid path");
}

#[tokio::test]
async fn unregistered_method_on_known_path_returns_invalid_path() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, ErrorDto) =
        send(&app, request(Method::DELETE, "/api/articles/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "invalid path");

    let (status, body): (_, ErrorDto) = send(&app, request(Method::POST, "/api/topics")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "invalid path");
}

#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, Value) = send(&app, get("/api/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/topics",
        "/api/users",
        "/api/articles",
        "/api/articles/{article_id}",
        "/api/articles/{article_id}/comments",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(body["paths"]["/api/articles/{article_id}"]["patch"].is_object());
}

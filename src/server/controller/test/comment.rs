use axum::http::StatusCode;
use test_utils::fixture::seed::COMMENTS;

use super::*;
use crate::model::{api::ErrorDto, comment::CommentListDto};

#[tokio::test]
async fn lists_seeded_comments_in_posting_order() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, CommentListDto) = send(&app, get("/api/articles/1/comments")).await;

    assert_eq!(status, StatusCode::OK);

    // Comment ids follow the seed order.
    let expected: Vec<(i32, &str)> = COMMENTS
        .iter()
        .enumerate()
        .filter(|(_, c)| c.article_id == 1)
        .map(|(i, c)| (i as i32 + 1, c.body))
        .collect();
    let actual: Vec<(i32, &str)> = body
        .comments
        .iter()
        .map(|c| (c.comment_id, c.body.as_str()))
        .collect();

    assert_eq!(actual, expected);
    assert!(body.comments.iter().all(|c| c.article_id == 1));
}

#[tokio::test]
async fn article_without_comments_returns_empty_list() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, CommentListDto) = send(&app, get("/api/articles/2/comments")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.comments.is_empty());
}

#[tokio::test]
async fn missing_article_returns_not_found() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, ErrorDto) = send(&app, get("/api/articles/999/comments")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "Article not found");
}

#[tokio::test]
async fn malformed_id_returns_bad_request() {
    let (_test, app) = seeded_app().await;

    let (status, body): (_, ErrorDto) = send(&app, get("/api/articles/bananas/comments")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.msg, "Bad request");
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, comment::CommentListDto},
    server::{
        error::AppError, service::comment::CommentService, state::AppState,
        util::parse::parse_article_id,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// GET /api/articles/{article_id}/comments - List the comments of an article
///
/// An article without comments yields `200 OK` with an empty list.
///
/// # Returns
/// - `200 OK`: `{ comments: [...] }` in posting order
/// - `400 Bad Request`: `article_id` is not an integer
/// - `404 Not Found`: No article with that id
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentListDto),
        (status = 400, description = "Malformed article id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments_by_article_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&article_id)?;

    let comments = CommentService::new(&state.db)
        .get_by_article_id(article_id)
        .await?;

    let dto = CommentListDto {
        comments: comments.into_iter().map(|c| c.into_dto()).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        article::{
            ArticleListDto, ArticleQueryDto, ArticleResponseDto, UpdateArticleVotesDto,
        },
    },
    server::{
        error::{AppError, INVALID_DATA_TYPE_MSG},
        model::article::{GetArticlesParam, UpdateArticleVotesParam},
        service::article::ArticleService,
        state::AppState,
        util::parse::parse_article_id,
    },
};

pub static ARTICLE_TAG: &str = "article";

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = ArticleListDto),
        (status = 400, description = "Invalid sort_by or order query", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetArticlesParam::from_dto(query)?;

    let articles = ArticleService::new(&state.db).get_all(param).await?;

    let dto = ArticleListDto {
        articles: articles.into_iter().map(|a| a.into_dto()).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ArticleResponseDto),
        (status = 400, description = "Malformed article id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&article_id)?;

    let article = ArticleService::new(&state.db).get_by_id(article_id).await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

/// PATCH /api/articles/{article_id} - Add `inc_votes` to an article's vote count
///
/// The id is validated before the body, so a request with both a malformed id and a
/// malformed body reports the id.
///
/// # Returns
/// - `200 OK`: `{ article: {...} }` with the updated vote count
/// - `400 Bad Request`: Malformed id, or `inc_votes` missing, not an integer, or pushing
///   the count out of range
/// - `404 Not Found`: No article with that id
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticleVotesDto,
    responses(
        (status = 200, description = "Successfully updated votes", body = ArticleResponseDto),
        (status = 400, description = "Malformed article id or vote delta", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<UpdateArticleVotesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&article_id)?;

    let inc_votes = match payload {
        Ok(Json(UpdateArticleVotesDto {
            inc_votes: Some(inc_votes),
        })) => inc_votes,
        Ok(_) => return Err(AppError::BadRequest(INVALID_DATA_TYPE_MSG.to_string())),
        Err(rejection) => {
            tracing::debug!("Rejected vote update body: {}", rejection);
            return Err(AppError::BadRequest(INVALID_DATA_TYPE_MSG.to_string()));
        }
    };

    let article = ArticleService::new(&state.db)
        .update_votes(UpdateArticleVotesParam {
            article_id,
            inc_votes,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

//! Route table, OpenAPI document, and HTTP layers.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{article, comment, topic, user},
    error::{AppError, INVALID_PATH_MSG},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "newsdesk",
        description = "Topics, articles, users, and comments of a news site"
    ),
    tags(
        (name = "topic", description = "Topic listing"),
        (name = "article", description = "Article listing, lookup, and voting"),
        (name = "user", description = "User listing"),
        (name = "comment", description = "Comments on an article"),
    )
)]
pub struct ApiDoc;

/// Builds the API routes with their OpenAPI document and Swagger UI.
///
/// Requests matching no route, including a known path with an unregistered method,
/// are answered with 404 `invalid path`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(topic::get_topics))
        .routes(routes!(user::get_users))
        .routes(routes!(article::get_articles))
        .routes(routes!(
            article::get_article_by_id,
            article::patch_article_by_id
        ))
        .routes(routes!(comment::get_comments_by_article_id))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .method_not_allowed_fallback(invalid_path)
        .fallback(invalid_path)
}

/// Builds the complete application with state and HTTP layers applied.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn invalid_path() -> AppError {
    AppError::NotFound(INVALID_PATH_MSG.to_string())
}

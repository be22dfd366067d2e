use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Envelope for single-article responses: `{ "article": { ... } }`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleResponseDto {
    pub article: ArticleDto,
}

/// Article row annotated with the number of comments referencing it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleListItemDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleListItemDto>,
}

/// Body of `PATCH /api/articles/{article_id}`.
///
/// `inc_votes` is optional at the type level so a missing field can be reported
/// with the same message as a non-numeric one.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateArticleVotesDto {
    pub inc_votes: Option<i32>,
}

/// Query string accepted by `GET /api/articles`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleQueryDto {
    /// Only return articles with this topic slug.
    pub topic: Option<String>,
    /// Column to sort by (default: `created_at`).
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default: `desc`).
    pub order: Option<String>,
}

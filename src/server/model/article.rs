//! Article domain models and parameters.
//!
//! Provides the article domain model, its comment-count-annotated listing variant, and
//! the parameter types for listing and vote updates. Listing parameters are validated
//! here so the data layer only ever sees whitelisted sort columns.

use chrono::{DateTime, Utc};

use crate::{
    model::article::{ArticleDto, ArticleListItemDto, ArticleQueryDto},
    server::error::AppError,
};

/// A post with title, body, author, topic, vote count, and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    /// Slug of the topic the article belongs to.
    pub topic: String,
    /// Username of the article's author.
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Vote tally; may go negative.
    pub votes: i32,
}

impl Article {
    /// Converts the article domain model to a DTO for API responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
        }
    }

    /// Converts an entity model to an article domain model at the repository boundary.
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            article_id: entity.article_id,
            title: entity.title,
            topic: entity.topic,
            author: entity.author,
            body: entity.body,
            created_at: entity.created_at,
            votes: entity.votes,
        }
    }
}

/// Article together with the number of comments referencing it.
///
/// `comment_count` is computed at read time and is zero for articles without comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithCommentCount {
    pub article: Article,
    pub comment_count: i64,
}

impl ArticleWithCommentCount {
    pub fn into_dto(self) -> ArticleListItemDto {
        let article = self.article;

        ArticleListItemDto {
            article_id: article.article_id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            comment_count: self.comment_count,
        }
    }
}

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSortColumn {
    /// Parses a `sort_by` query value against the whitelist of sortable columns.
    ///
    /// # Returns
    /// - `Ok(ArticleSortColumn)` - Recognized column name
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(AppError::BadRequest("Invalid sort_by query".to_string())),
        }
    }
}

/// Direction of an article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses an `order` query value, case-insensitively.
    ///
    /// # Returns
    /// - `Ok(SortOrder)` - `asc` or `desc`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::BadRequest("Invalid order query".to_string())),
        }
    }
}

/// Parameters for listing articles with comment counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetArticlesParam {
    /// Only include articles with this topic slug.
    pub topic: Option<String>,
    pub sort_by: ArticleSortColumn,
    pub order: SortOrder,
}

impl GetArticlesParam {
    /// Validates the listing query string and converts it into listing parameters.
    ///
    /// Missing `sort_by` defaults to `created_at` and missing `order` to `desc`.
    ///
    /// # Returns
    /// - `Ok(GetArticlesParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Unknown sort column or order direction
    pub fn from_dto(dto: ArticleQueryDto) -> Result<Self, AppError> {
        let sort_by = match dto.sort_by.as_deref() {
            Some(value) => ArticleSortColumn::parse(value)?,
            None => ArticleSortColumn::default(),
        };
        let order = match dto.order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::default(),
        };

        Ok(Self {
            topic: dto.topic,
            sort_by,
            order,
        })
    }
}

/// Parameters for applying a vote delta to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArticleVotesParam {
    pub article_id: i32,
    /// Signed amount added to the current vote count.
    pub inc_votes: i32,
}

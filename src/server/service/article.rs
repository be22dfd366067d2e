//! Article service for business logic.
//!
//! This module provides the `ArticleService` for fetching, listing, and voting on
//! articles. It converts absent rows into `NotFound` errors and validates the topic
//! filter before listing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, topic::TopicRepository},
    error::{AppError, INVALID_DATA_TYPE_MSG},
    model::article::{
        Article, ArticleWithCommentCount, GetArticlesParam, UpdateArticleVotesParam,
    },
};

const ARTICLE_NOT_FOUND: &str = "Article not found";

/// Service providing business logic for articles.
pub struct ArticleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    /// Creates a new ArticleService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an article by id.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, article_id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ARTICLE_NOT_FOUND.to_string()))
    }

    /// Lists articles with their comment counts.
    ///
    /// When a topic filter is given the topic must exist; an existing topic without
    /// articles yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleWithCommentCount>)` - Matching articles in the requested order
    /// - `Err(AppError::NotFound)` - The topic filter names an unknown topic
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        param: GetArticlesParam,
    ) -> Result<Vec<ArticleWithCommentCount>, AppError> {
        if let Some(topic) = &param.topic {
            let exists = TopicRepository::new(self.db)
                .find_by_slug(topic)
                .await?
                .is_some();
            if !exists {
                return Err(AppError::NotFound("Topic not found".to_string()));
            }
        }

        let articles = ArticleRepository::new(self.db)
            .get_all_with_comment_count(&param)
            .await?;

        Ok(articles)
    }

    /// Applies a vote delta to an article.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article with its updated vote count
    /// - `Err(AppError::BadRequest)` - The new count would not fit in an `i32`
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_votes(&self, param: UpdateArticleVotesParam) -> Result<Article, AppError> {
        let article_repo = ArticleRepository::new(self.db);

        let Some(article) = article_repo
            .increment_votes(param.article_id, param.inc_votes)
            .await?
        else {
            if article_repo.exists(param.article_id).await? {
                return Err(AppError::BadRequest(INVALID_DATA_TYPE_MSG.to_string()));
            }
            return Err(AppError::NotFound(ARTICLE_NOT_FOUND.to_string()));
        };

        tracing::debug!(
            "Applied {} votes to article {}, now {}",
            param.inc_votes,
            article.article_id,
            article.votes
        );

        Ok(article)
    }
}

//! Comment service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::AppError,
    model::comment::Comment,
};

pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the comments of an article.
    ///
    /// An existing article without comments yields an empty list so callers can tell
    /// it apart from an article that does not exist.
    ///
    /// # Arguments
    /// - `article_id` - Id of the article
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments in insertion order (possibly empty)
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(AppError::NotFound("Article not found".to_string()));
        }

        let comments = CommentRepository::new(self.db)
            .get_by_article_id(article_id)
            .await?;

        Ok(comments)
    }
}

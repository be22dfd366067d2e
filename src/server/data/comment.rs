//! Comment data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments posted on an article in insertion order.
    ///
    /// Does not check that the article exists; an unknown id yields an empty list.
    ///
    /// # Arguments
    /// - `article_id` - Id of the article the comments belong to
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments ordered by ascending `comment_id`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }
}

//! Comment domain model.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// A reply attached to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    /// Article the comment was posted on.
    pub article_id: i32,
    /// Username of the comment's author.
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            article_id: self.article_id,
            author: self.author,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            article_id: entity.article_id,
            author: entity.author,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }
}

//! Article data repository for database operations.
//!
//! This module provides the `ArticleRepository` for reading articles, listing them with a
//! derived comment count, and applying vote deltas. Vote updates are a single
//! `votes = votes + delta` statement so concurrent requests never lose an increment.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::article::{
    Article, ArticleSortColumn, ArticleWithCommentCount, GetArticlesParam, SortOrder,
};

/// Alias of the derived comment count column in listing queries.
const COMMENT_COUNT: &str = "comment_count";

/// Row shape of the article listing query.
#[derive(Debug, FromQueryResult)]
struct ArticleCommentCountRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl ArticleCommentCountRow {
    fn into_domain(self) -> ArticleWithCommentCount {
        ArticleWithCommentCount {
            article: Article {
                article_id: self.article_id,
                title: self.title,
                topic: self.topic,
                author: self.author,
                body: self.body,
                created_at: self.created_at,
                votes: self.votes,
            },
            comment_count: self.comment_count,
        }
    }
}

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an article by id.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Checks whether an article with the given id exists.
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(article_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists articles annotated with their comment count.
    ///
    /// Left-joins comments and groups by article so articles without comments are
    /// included with a count of zero. Rows tied on the sort column are ordered by
    /// ascending `article_id`.
    ///
    /// # Arguments
    /// - `param` - Optional topic filter plus validated sort column and direction
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleWithCommentCount>)` - Matching articles in the requested order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_comment_count(
        &self,
        param: &GetArticlesParam,
    ) -> Result<Vec<ArticleWithCommentCount>, DbErr> {
        let mut query = entity::prelude::Article::find()
            .column_as(
                Expr::col((
                    entity::comment::Entity,
                    entity::comment::Column::CommentId,
                ))
                .count(),
                COMMENT_COUNT,
            )
            .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
            .group_by(entity::article::Column::ArticleId);

        if let Some(topic) = &param.topic {
            query = query.filter(entity::article::Column::Topic.eq(topic.as_str()));
        }

        let order = match param.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        query = match param.sort_by {
            ArticleSortColumn::ArticleId => {
                query.order_by(entity::article::Column::ArticleId, order)
            }
            ArticleSortColumn::Title => query.order_by(entity::article::Column::Title, order),
            ArticleSortColumn::Topic => query.order_by(entity::article::Column::Topic, order),
            ArticleSortColumn::Author => query.order_by(entity::article::Column::Author, order),
            ArticleSortColumn::CreatedAt => {
                query.order_by(entity::article::Column::CreatedAt, order)
            }
            ArticleSortColumn::Votes => query.order_by(entity::article::Column::Votes, order),
            ArticleSortColumn::CommentCount => query.order_by(Expr::cust(COMMENT_COUNT), order),
        };

        let rows = query
            .order_by_asc(entity::article::Column::ArticleId)
            .into_model::<ArticleCommentCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(ArticleCommentCountRow::into_domain)
            .collect())
    }

    /// Adds a signed delta to an article's vote count.
    ///
    /// The update is a single `UPDATE ... SET votes = votes + $1` statement; the updated
    /// row is read back inside the same transaction so the returned count reflects
    /// exactly this increment. Rows whose new count would leave the `i32` range are
    /// excluded by the statement itself, so an overflowing delta changes nothing.
    ///
    /// # Arguments
    /// - `article_id` - Id of the article to update
    /// - `inc_votes` - Signed amount to add (may be zero or negative)
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The article after the update
    /// - `Ok(None)` - No article with that id, or the new count would overflow; nothing
    ///   was changed
    /// - `Err(DbErr)` - Database error during update or read-back
    pub async fn increment_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> Result<Option<Article>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::Votes,
                Expr::col(entity::article::Column::Votes).add(inc_votes),
            )
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .filter(
                Expr::col(entity::article::Column::Votes)
                    .add(i64::from(inc_votes))
                    .between(i64::from(i32::MIN), i64::from(i32::MAX)),
            )
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let entity = entity::prelude::Article::find_by_id(article_id)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(entity.map(Article::from_entity))
    }
}

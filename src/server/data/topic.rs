//! Topic data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::topic::Topic;

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every topic, ordered by slug.
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let entities = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Slug)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Topic::from_entity).collect())
    }

    /// Finds a topic by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Topic))` - Topic found
    /// - `Ok(None)` - No topic with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find_by_id(slug.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Topic::from_entity))
    }
}

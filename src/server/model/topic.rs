//! Topic domain model.

use crate::model::topic::TopicDto;

/// A named category articles belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// Unique key of the topic.
    pub slug: String,
    pub description: String,
}

impl Topic {
    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            slug: self.slug,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }
}

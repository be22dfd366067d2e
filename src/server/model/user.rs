//! User domain model.
//!
//! Users are read-only in this application: they are seeded externally and referenced
//! as authors of articles and comments.

use crate::model::user::UserDto;

/// A registered author.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique username of the user.
    pub username: String,
    /// Display name of the user.
    pub name: String,
    /// Link to the user's avatar image.
    pub avatar_url: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            avatar_url: entity.avatar_url,
        }
    }
}

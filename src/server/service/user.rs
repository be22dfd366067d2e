//! User service for business logic.
//!
//! This module provides the `UserService` for user-related queries while working with
//! domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }
}

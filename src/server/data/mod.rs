//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. Every statement
//! is parameterized; identifiers interpolated into SQL come only from whitelisted enums.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;

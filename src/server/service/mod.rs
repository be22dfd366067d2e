//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Turning missing rows into domain errors
//! - **Orchestration**: Checking referenced parents (article, topic) before listing children
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

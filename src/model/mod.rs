//! API data transfer objects serialized to and from JSON.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

//! HTTP request handlers.
//!
//! Each handler extracts path, query, and body input, calls the matching service, and
//! wraps the result in the JSON envelope of its endpoint. Failures are returned as
//! `AppError` and mapped to responses by its `IntoResponse` implementation.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;

//! Newsdesk Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the newsdesk
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting single rows with sensible defaults
//! - **fixture**: A deterministic seed dataset shared by HTTP-level tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Topic;
//!
//! #[tokio::test]
//! async fn test_topic_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Topic)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

//! Hierarchy Bot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! hierarchy bot. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, and factories for seeding member and promotion records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_member_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let member = test_utils::factory::create_member(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

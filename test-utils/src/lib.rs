//! Moodboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the moodboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, customizable table schemas, and a throwaway upload directory.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and upload directory
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_moodboard_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_moodboard_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

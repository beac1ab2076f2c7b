//! Chancery Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the chancery
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_department_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new()
//!         .with_user_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let db = test.db.as_ref().unwrap();
//!     let department = factory::create_department(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

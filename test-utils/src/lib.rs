//! Outdoorsy Test Utils
//!
//! Database and session scaffolding for Outdoorsy tests. Each test gets its own in-memory
//! SQLite database holding only the tables it asks for.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert users, campgrounds, images, reviews and favorites with defaults
//! - **fixture**: In-memory entity models that are never persisted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_reviews() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_, campground, _) = factory::helpers::create_review_with_dependencies(db).await?;
//!     // Query reviews for `campground.id`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

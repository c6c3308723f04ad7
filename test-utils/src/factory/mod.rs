//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly into the database, so parent
//! rows (users before campgrounds, campgrounds before reviews) must be created first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let campground = factory::campground::create_campground(&db, user.id).await?;
//!
//!     let (author, campground, review) =
//!         factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let campground = factory::campground::CampgroundFactory::new(&db, user.id)
//!     .title("Pine Ridge")
//!     .price(25.0)
//!     .coordinates(-122.4, 37.8)
//!     .build()
//!     .await?;
//! ```

pub mod campground;
pub mod campground_image;
pub mod helpers;
pub mod review;
pub mod user;
pub mod user_favorite;

pub use campground::create_campground;
pub use campground_image::create_image;
pub use review::create_review;
pub use user::create_user;
pub use user_favorite::create_favorite;

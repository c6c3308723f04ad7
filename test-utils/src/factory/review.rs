//! Review factory for creating test review entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let review = ReviewFactory::new(&db, campground.id, user.id)
///     .rating(2)
///     .body("Too windy")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    campground_id: i32,
    author_id: i32,
    rating: i32,
    body: String,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: `5`
    /// - body: `"Great campground"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, campground_id: i32, author_id: i32) -> Self {
        Self {
            db,
            campground_id,
            author_id,
            rating: 5,
            body: "Great campground".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            campground_id: ActiveValue::Set(self.campground_id),
            author_id: ActiveValue::Set(self.author_id),
            rating: ActiveValue::Set(self.rating),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    campground_id: i32,
    author_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, campground_id, author_id).build().await
}

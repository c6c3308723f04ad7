use chrono::{DateTime, Utc};

use crate::{model::review::ReviewDto, server::model::user::User};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub campground_id: i32,
    pub author_id: i32,
    pub rating: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            campground_id: entity.campground_id,
            author_id: entity.author_id,
            rating: entity.rating,
            body: entity.body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A review joined with its author, for display under a campground.
#[derive(Debug, Clone)]
pub struct ReviewWithAuthor {
    pub review: Review,
    /// `None` when the author row is gone.
    pub author: Option<User>,
}

impl ReviewWithAuthor {
    pub fn from_entity(
        review: entity::review::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            review: Review::from_entity(review),
            author: author.map(User::from_entity),
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.review.id,
            campground_id: self.review.campground_id,
            rating: self.review.rating,
            body: self.review.body,
            author: self.author.map(User::into_dto),
            created_at: self.review.created_at,
            updated_at: self.review.updated_at,
        }
    }
}

/// Validated review input.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub campground_id: i32,
    pub author_id: i32,
    /// 1 to 5 inclusive.
    pub rating: i32,
    pub body: String,
}

/// One page of a campground's reviews, newest first.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub reviews: Vec<ReviewWithAuthor>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

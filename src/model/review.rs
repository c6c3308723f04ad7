use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub campground_id: i32,
    pub rating: i32,
    pub body: String,
    /// `None` when the author account no longer exists.
    pub author: Option<UserDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review fields as submitted. Values are checked by the review validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReviewFieldsDto {
    pub rating: Option<f64>,
    pub body: Option<String>,
}

/// Body of `POST /campgrounds/{id}/reviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub review: Option<ReviewFieldsDto>,
}

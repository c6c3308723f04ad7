//! Favorite factory linking a user to a campground.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a campground as a favorite of a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user
/// - `campground_id` - ID of the favorited campground
///
/// # Returns
/// - `Ok(entity::user_favorite::Model)` - Created favorite row
/// - `Err(DbErr)` - Database error, including duplicate favorites
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    campground_id: i32,
) -> Result<entity::user_favorite::Model, DbErr> {
    entity::user_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        campground_id: ActiveValue::Set(campground_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

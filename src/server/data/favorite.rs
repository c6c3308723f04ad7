use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Join table between users and the campgrounds they favorited.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, campground_id: i32) -> Result<bool, DbErr> {
        let favorite = entity::prelude::UserFavorite::find_by_id((user_id, campground_id))
            .one(self.db)
            .await?;

        Ok(favorite.is_some())
    }

    pub async fn add(&self, user_id: i32, campground_id: i32) -> Result<(), DbErr> {
        entity::user_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            campground_id: ActiveValue::Set(campground_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - Row removed
    /// - `Ok(false)` - Campground was not a favorite
    pub async fn remove(&self, user_id: i32, campground_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserFavorite::delete_by_id((user_id, campground_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Campground ids favorited by the user, most recently favorited first.
    pub async fn get_campground_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserFavorite::find()
            .select_only()
            .column(entity::user_favorite::Column::CampgroundId)
            .filter(entity::user_favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_favorite::Column::CreatedAt)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
